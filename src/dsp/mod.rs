//! DSP Engine — Pure Rust audio synthesis and processing.
//!
//! All DSP runs in Rust for deterministic, cross-platform audio output.
//! The same code powers both the WASM presentation layer and native
//! callers (offline WAV export).

pub mod buffer;
pub mod codec;
pub mod envelope;
pub mod mixer;
pub mod remix;
pub mod synth;
pub mod tone;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random stream for one engine call.
///
/// Seeded calls reproduce the same musical decisions; unseeded calls pull
/// from entropy and are intentionally unrepeatable.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
