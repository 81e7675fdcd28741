//! Track mixer — sums rendered tones into one float master buffer.

use crate::dsp::buffer::clamp16;

/// An owned accumulation buffer that tones are summed into at offsets.
///
/// Writes past the end of the track are silently dropped rather than
/// wrapped or grown, so a tone scheduled near the tail just gets cut.
#[derive(Debug, Clone)]
pub struct TrackMix {
    buffer: Vec<f64>,
}

impl TrackMix {
    /// A zero-filled track of `num_samples`.
    pub fn new(num_samples: usize) -> Self {
        TrackMix {
            buffer: vec![0.0; num_samples],
        }
    }

    /// Add `sound` into the track starting at `start`, clipped to bounds.
    pub fn mix_at(&mut self, start: usize, sound: &[f64]) {
        let end = self.buffer.len().min(start.saturating_add(sound.len()));
        for index in start..end {
            self.buffer[index] += sound[index - start];
        }
    }

    /// Scale by `gain` and clamp into 16-bit PCM.
    pub fn into_pcm(self, gain: f64) -> Vec<i16> {
        self.buffer.into_iter().map(|s| clamp16(s * gain)).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_silent() {
        let mix = TrackMix::new(64);
        assert_eq!(mix.len(), 64);
        assert!(mix.into_pcm(26000.0).iter().all(|&s| s == 0));
    }

    #[test]
    fn accumulates_overlapping_sounds() {
        let mut mix = TrackMix::new(4);
        mix.mix_at(0, &[0.5, 0.5]);
        mix.mix_at(1, &[0.25, 0.25]);
        let pcm = mix.into_pcm(1000.0);
        assert_eq!(pcm, vec![500, 750, 250, 0]);
    }

    #[test]
    fn clips_past_the_track_end() {
        let mut mix = TrackMix::new(3);
        mix.mix_at(2, &[0.1, 0.2, 0.3]);
        let pcm = mix.into_pcm(1000.0);
        assert_eq!(pcm, vec![0, 0, 100], "samples past the end are dropped");
    }

    #[test]
    fn start_beyond_end_is_a_noop() {
        let mut mix = TrackMix::new(2);
        mix.mix_at(10, &[1.0, 1.0]);
        assert_eq!(mix.into_pcm(1000.0), vec![0, 0]);
    }

    #[test]
    fn pcm_conversion_clamps() {
        let mut mix = TrackMix::new(2);
        mix.mix_at(0, &[2.0, -2.0]);
        let pcm = mix.into_pcm(26000.0);
        assert_eq!(pcm, vec![32767, -32768]);
    }
}
