//! Remix engine — stochastic beat-chunk rearrangement of an existing track.
//!
//! The input is cut into half-second chunks, shuffled, and each chunk then
//! runs a gauntlet of independent draws: skipped outright, reversed,
//! stuttered (its first quarter repeated a few times in front), and gained.
//! Survivors are crossfaded together, smoothed and normalized.

use crate::dsp::buffer::{self, clamp16};
use crate::dsp::seeded_rng;
use crate::error::MoodMixError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Chunks below this length never stutter; a quarter of anything shorter
/// is too brief to read as a rhythmic figure.
const STUTTER_MIN_LEN: usize = 64;

/// Remix a mono track into a reordered, mutated version of itself.
///
/// Fails with `InvalidParameter` for an intensity outside [0, 1] or a zero
/// sample rate. Inputs shorter than two chunks come back unchanged; the
/// same seed always reproduces the same remix.
pub fn remix_track(
    samples: &[i16],
    sample_rate: u32,
    intensity: f64,
    seed: Option<u64>,
) -> Result<Vec<i16>, MoodMixError> {
    if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
        return Err(MoodMixError::InvalidParameter {
            name: "intensity",
            detail: format!("must be between 0 and 1, got {intensity}"),
        });
    }
    if sample_rate == 0 {
        return Err(MoodMixError::InvalidParameter {
            name: "sample rate",
            detail: "must be positive".to_string(),
        });
    }

    let mut rng = seeded_rng(seed);
    let chunk_len = ((sample_rate as f64 * 0.5).round() as usize).max(2048);
    let mut chunks: Vec<&[i16]> = samples.chunks(chunk_len).collect();
    if chunks.len() < 2 {
        return Ok(samples.to_vec());
    }
    chunks.shuffle(&mut rng);

    let skip_probability = (intensity * 0.2).min(0.35);
    let reverse_probability = (0.1 + intensity * 0.35).min(0.5);
    let stutter_probability = (0.1 + intensity * 0.4).min(0.6);
    let fade_samples = (sample_rate as f64 * 0.01) as usize;

    let mut remixed: Vec<i16> = Vec::new();
    for chunk in chunks {
        if rng.gen_range(0.0..1.0) < skip_probability {
            continue;
        }
        let mut working = chunk.to_vec();
        if rng.gen_range(0.0..1.0) < reverse_probability {
            working.reverse();
        }
        if rng.gen_range(0.0..1.0) < stutter_probability && working.len() > STUTTER_MIN_LEN {
            let repeats: usize = rng.gen_range(2..=4);
            let mut stuttered = working[..working.len() / 4].repeat(repeats);
            stuttered.extend_from_slice(&working);
            working = stuttered;
        }

        let gain = 0.8 + rng.gen_range(0.0..1.0) * (0.4 + intensity * 0.3);
        for sample in &mut working {
            *sample = clamp16(*sample as f64 * gain);
        }
        buffer::crossfade_append(&mut remixed, &working, fade_samples);
    }

    let window = ((8.0 - intensity * 4.0).round() as usize).max(2);
    let smoothed = buffer::lowpass(&remixed, window);
    Ok(buffer::normalize(&smoothed, buffer::DEFAULT_TARGET_PEAK))
}
