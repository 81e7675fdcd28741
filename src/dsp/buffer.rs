//! Sample buffer utilities — clamping, peak normalization, crossfaded
//! concatenation and moving-average smoothing over 16-bit PCM.
//!
//! Both the synthesizer and the remix engine finalize through these, so the
//! arithmetic here (truncate toward zero, saturate to 16 bits) defines the
//! engine's output character.

use std::collections::VecDeque;

/// Peak level the remix engine normalizes to.
pub const DEFAULT_TARGET_PEAK: i32 = 29000;

/// Clamp a float sample into signed 16-bit range.
///
/// Fractional values truncate toward zero before saturating, so `-0.9`
/// becomes `0` and `32767.9` becomes `32767`.
pub fn clamp16(value: f64) -> i16 {
    (value as i64).clamp(-32768, 32767) as i16
}

/// Rescale `samples` so the absolute peak lands on `target_peak`.
///
/// Quiet material is amplified and hot material attenuated alike. Empty and
/// all-zero buffers come back unchanged.
pub fn normalize(samples: &[i16], target_peak: i32) -> Vec<i16> {
    let peak = samples.iter().map(|&s| (s as i32).abs()).max().unwrap_or(0);
    if peak == 0 {
        return samples.to_vec();
    }
    let gain = target_peak as f64 / peak as f64;
    samples.iter().map(|&s| clamp16(s as f64 * gain)).collect()
}

/// Append `chunk` to `base`, blending the seam over `fade_samples` samples.
///
/// The overlap region replaces the tail of `base`: the outgoing signal ramps
/// from full weight down to zero while the incoming one ramps up, so the
/// result is `base.len() + chunk.len() - overlap` samples long. An empty
/// `base` just takes the chunk; a zero overlap degenerates to concatenation.
pub fn crossfade_append(base: &mut Vec<i16>, chunk: &[i16], fade_samples: usize) {
    if base.is_empty() {
        base.extend_from_slice(chunk);
        return;
    }
    let fade = fade_samples.min(base.len()).min(chunk.len());
    if fade == 0 {
        base.extend_from_slice(chunk);
        return;
    }

    let start = base.len() - fade;
    for index in 0..fade {
        let mix_out = (fade - index) as f64 / fade as f64;
        let mix_in = index as f64 / fade as f64;
        let value = base[start + index] as f64 * mix_out + chunk[index] as f64 * mix_in;
        base[start + index] = clamp16(value);
    }
    base.extend_from_slice(&chunk[fade..]);
}

/// Causal moving-average lowpass.
///
/// The window grows from 1 at the start of the buffer up to `window`, so the
/// output has the same length as the input with no look-ahead and no
/// padding. Windows of 1 or less leave the signal untouched.
pub fn lowpass(samples: &[i16], window: usize) -> Vec<i16> {
    if window <= 1 || samples.is_empty() {
        return samples.to_vec();
    }

    let mut output = Vec::with_capacity(samples.len());
    // Pushed before popped, so the ring briefly holds window + 1 samples.
    let mut ring: VecDeque<i16> = VecDeque::with_capacity(window + 1);
    let mut running_sum: i64 = 0;
    for &sample in samples {
        running_sum += sample as i64;
        ring.push_back(sample);
        if ring.len() > window {
            if let Some(oldest) = ring.pop_front() {
                running_sum -= oldest as i64;
            }
        }
        output.push(clamp16(running_sum as f64 / ring.len() as f64));
    }
    output
}
