//! WAV codec — parses and emits RIFF/WAVE containers of integer PCM.
//!
//! Decoding accepts 8-bit unsigned and 16-bit signed PCM at any channel
//! count and hands back mono 16-bit samples; encoding always writes 16-bit
//! mono. Everything else (float PCM, compressed formats, malformed or
//! truncated containers) is rejected as unsupported.

use crate::error::MoodMixError;

fn unsupported(detail: impl Into<String>) -> MoodMixError {
    MoodMixError::UnsupportedFormat {
        detail: detail.into(),
    }
}

struct FmtChunk {
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

/// Decode a WAV container into its sample rate and mono 16-bit samples.
///
/// Multi-channel input is downmixed by averaging each frame (fractions
/// truncate toward zero); 8-bit samples are de-offset by 128 and scaled by
/// 256 after the downmix so they occupy the full 16-bit range. Unknown
/// chunks are skipped, honoring the RIFF pad byte on odd sizes.
pub fn decode_wav(bytes: &[u8]) -> Result<(u32, Vec<i16>), MoodMixError> {
    if bytes.len() < 12 {
        return Err(unsupported("container too small for a RIFF header"));
    }
    if &bytes[0..4] != b"RIFF" {
        return Err(unsupported("missing RIFF magic"));
    }
    if &bytes[8..12] != b"WAVE" {
        return Err(unsupported("missing WAVE identifier"));
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut data: Option<&[u8]> = None;
    let mut offset = 12;
    while offset + 8 <= bytes.len() {
        let id = &bytes[offset..offset + 4];
        let size = u32::from_le_bytes([
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]) as usize;
        let body_start = offset + 8;
        let body_end = body_start
            .checked_add(size)
            .ok_or_else(|| unsupported("chunk size overflows the container"))?;
        if body_end > bytes.len() {
            return Err(unsupported(format!(
                "truncated {} chunk",
                String::from_utf8_lossy(id)
            )));
        }
        let body = &bytes[body_start..body_end];

        if id == b"fmt " && fmt.is_none() {
            if body.len() < 16 {
                return Err(unsupported("fmt chunk too small"));
            }
            fmt = Some(FmtChunk {
                format_tag: u16::from_le_bytes([body[0], body[1]]),
                channels: u16::from_le_bytes([body[2], body[3]]),
                sample_rate: u32::from_le_bytes([body[4], body[5], body[6], body[7]]),
                bits_per_sample: u16::from_le_bytes([body[14], body[15]]),
            });
        } else if id == b"data" && data.is_none() {
            data = Some(body);
        }

        // Chunks are word-aligned: odd sizes carry a pad byte.
        offset = body_end + (size & 1);
    }

    let fmt = fmt.ok_or_else(|| unsupported("missing fmt chunk"))?;
    let data = data.ok_or_else(|| unsupported("missing data chunk"))?;

    if fmt.format_tag != 1 {
        return Err(unsupported(format!(
            "format tag {} is not integer PCM",
            fmt.format_tag
        )));
    }
    if fmt.channels == 0 {
        return Err(unsupported("zero channels"));
    }
    if fmt.sample_rate == 0 {
        return Err(unsupported("zero sample rate"));
    }

    let mut samples: Vec<i32> = match fmt.bits_per_sample {
        8 => data.iter().map(|&b| b as i32 - 128).collect(),
        16 => data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as i32)
            .collect(),
        bits => {
            return Err(unsupported(format!(
                "{bits}-bit PCM is not supported, expected 8 or 16"
            )));
        }
    };

    if fmt.channels > 1 {
        samples = samples
            .chunks(fmt.channels as usize)
            .map(|frame| {
                let sum: i64 = frame.iter().map(|&v| v as i64).sum();
                (sum as f64 / fmt.channels as f64) as i32
            })
            .collect();
    }

    if fmt.bits_per_sample == 8 {
        for value in &mut samples {
            *value *= 256;
        }
    }

    Ok((fmt.sample_rate, samples.into_iter().map(|v| v as i16).collect()))
}

/// Encode mono 16-bit samples as a WAV byte buffer.
pub fn encode_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let channels: u16 = 1;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
