pub mod dsp;
pub mod error;
pub mod profile;

use wasm_bindgen::prelude::*;

pub use crate::dsp::codec::{decode_wav, encode_wav};
pub use crate::dsp::remix::remix_track;
pub use crate::dsp::synth::generate_track;
pub use crate::error::MoodMixError;
pub use crate::profile::{Chord, Mood, MoodProfile};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the moodmix-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: synthesize a mood track and return it as WAV bytes.
#[wasm_bindgen]
pub fn generate_mood_wav(
    mood: &str,
    duration: f64,
    sample_rate: u32,
    seed: Option<u64>,
) -> Result<Vec<u8>, JsValue> {
    let samples = generate_track(mood, duration, sample_rate, seed)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(encode_wav(sample_rate, &samples))
}

/// WASM-exposed: decode a WAV file, remix it, and return the result as WAV
/// bytes at the source sample rate.
#[wasm_bindgen]
pub fn remix_wav(bytes: &[u8], intensity: f64, seed: Option<u64>) -> Result<Vec<u8>, JsValue> {
    let (sample_rate, samples) =
        decode_wav(bytes).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let remixed = remix_track(&samples, sample_rate, intensity, seed)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(encode_wav(sample_rate, &remixed))
}

/// WASM-exposed: list the available mood names.
#[wasm_bindgen]
pub fn mood_names() -> Vec<String> {
    Mood::ALL.iter().map(|m| m.name().to_string()).collect()
}

/// WASM-exposed: look up a mood profile (tempo, root, scale, progression,
/// accent color) as a plain JS object.
#[wasm_bindgen]
pub fn mood_profile(mood: &str) -> Result<JsValue, JsValue> {
    let profile = MoodProfile::named(mood).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(profile).map_err(|e| JsValue::from_str(&format!("{e}")))
}
