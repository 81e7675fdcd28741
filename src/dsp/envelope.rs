//! Fixed-length envelope — linear attack, flat sustain, linear release.
//!
//! Tones here always know their full length up front, so instead of a gated
//! state machine the envelope is a pure function of sample index: segment
//! boundaries are derived once from the total and `gain` is random access.

/// Fraction of the tone spent ramping up.
const ATTACK_FRACTION: f64 = 0.03;
/// Fraction of the tone spent ramping down.
const RELEASE_FRACTION: f64 = 0.15;
/// Plateau gain between attack and release.
const SUSTAIN_LEVEL: f64 = 0.85;

/// Amplitude envelope for a tone of known length.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    total: usize,
    attack: usize,
    release: usize,
    sustain_end: usize,
}

impl Envelope {
    /// Build the envelope for a tone of `total` samples.
    ///
    /// Attack and release each cover at least one sample, and the sustain
    /// region always ends past the attack, so even degenerate one-sample
    /// tones produce a well-defined (if silent) curve.
    pub fn for_length(total: usize) -> Self {
        let attack = ((total as f64 * ATTACK_FRACTION) as usize).max(1);
        let release = ((total as f64 * RELEASE_FRACTION) as usize).max(1);
        Envelope {
            total,
            attack,
            release,
            sustain_end: (total.saturating_sub(release)).max(attack + 1),
        }
    }

    /// Gain in [0, 1] for the sample at `index`.
    pub fn gain(&self, index: usize) -> f64 {
        if index < self.attack {
            index as f64 / self.attack as f64
        } else if index > self.sustain_end {
            ((self.total as f64 - index as f64) / self.release as f64).max(0.0)
        } else {
            SUSTAIN_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_silent() {
        let env = Envelope::for_length(44100);
        assert_eq!(env.gain(0), 0.0);
    }

    #[test]
    fn attack_ramps_up() {
        let env = Envelope::for_length(10000);
        // 3% attack = 300 samples.
        let mut previous = -1.0;
        for index in 0..300 {
            let g = env.gain(index);
            assert!(g >= previous, "attack must not dip at {index}");
            previous = g;
        }
        assert!((env.gain(299) - 299.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn sustain_holds_the_plateau() {
        let env = Envelope::for_length(10000);
        // Well inside the body of the tone.
        for index in [400, 2000, 5000, 8000] {
            let g = env.gain(index);
            assert!((g - 0.85).abs() < 1e-12, "expected plateau at {index}, got {g}");
        }
    }

    #[test]
    fn release_ramps_to_silence() {
        let total = 10000;
        let env = Envelope::for_length(total);
        // 15% release = 1500 samples, so the tail starts at 8500.
        let mut previous = 1.0;
        for index in 8501..total {
            let g = env.gain(index);
            assert!(g <= previous, "release must not rise at {index}");
            previous = g;
        }
        assert!(env.gain(total - 1) < 0.001);
    }

    #[test]
    fn gain_stays_in_range() {
        for total in [1, 2, 17, 700, 44100] {
            let env = Envelope::for_length(total);
            for index in 0..total {
                let g = env.gain(index);
                assert!((0.0..=1.0).contains(&g), "gain {g} out of range at {index}/{total}");
            }
        }
    }

    #[test]
    fn one_sample_tone_is_silent() {
        let env = Envelope::for_length(1);
        assert_eq!(env.gain(0), 0.0);
    }
}
