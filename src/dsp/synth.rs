//! Mood synthesizer — renders a chord progression into a finished track.
//!
//! Each beat layers three chord tones, a bass note an octave below, and on
//! even beats of the brighter moods an off-beat arpeggio an octave up. The
//! float mix is then scaled to PCM, smoothed and normalized.

use crate::dsp::buffer;
use crate::dsp::mixer::TrackMix;
use crate::dsp::seeded_rng;
use crate::dsp::tone::{midi_to_freq, render_tone};
use crate::error::MoodMixError;
use crate::profile::MoodProfile;
use rand::Rng;

/// Gain applied when converting the float mix to 16-bit PCM.
const MASTER_GAIN: f64 = 26000.0;
/// Peak level the finished track is normalized to.
const TRACK_TARGET_PEAK: i32 = 28000;

/// Synthesize a mood track as mono 16-bit samples.
///
/// Fails with `UnknownMood` for a name outside the profile table and
/// `InvalidParameter` for a non-positive duration or zero sample rate. The
/// same seed always reproduces the same track; `None` draws from entropy.
pub fn generate_track(
    mood: &str,
    duration: f64,
    sample_rate: u32,
    seed: Option<u64>,
) -> Result<Vec<i16>, MoodMixError> {
    let profile = MoodProfile::named(mood)?;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(MoodMixError::InvalidParameter {
            name: "duration",
            detail: format!("must be a positive number of seconds, got {duration}"),
        });
    }
    if sample_rate == 0 {
        return Err(MoodMixError::InvalidParameter {
            name: "sample rate",
            detail: "must be positive".to_string(),
        });
    }

    let mut rng = seeded_rng(seed);
    let beat_seconds = profile.beat_seconds();
    let total_samples = (duration * sample_rate as f64) as usize;
    let mut track = TrackMix::new(total_samples);
    let chords = profile.chords();

    let mut beat_index = 0usize;
    loop {
        let start_sample = (beat_index as f64 * beat_seconds * sample_rate as f64) as usize;
        if start_sample >= total_samples {
            break;
        }
        let chord = &chords[beat_index % chords.len()];

        // Chord tones ring past the beat for a sustained pad.
        for note in chord.notes() {
            let tone = render_tone(midi_to_freq(note), beat_seconds * 1.9, sample_rate, 0.12, &mut rng);
            track.mix_at(start_sample, &tone);
        }

        let bass = render_tone(
            midi_to_freq(chord.bass()),
            beat_seconds * 0.95,
            sample_rate,
            0.2,
            &mut rng,
        );
        track.mix_at(start_sample, &bass);

        if profile.arpeggiated() && beat_index % 2 == 0 {
            let arp_note = chord.notes()[rng.gen_range(0..3)] + 12;
            let arp = render_tone(midi_to_freq(arp_note), beat_seconds * 0.4, sample_rate, 0.09, &mut rng);
            let half_beat = (beat_seconds * 0.5 * sample_rate as f64) as usize;
            track.mix_at(start_sample + half_beat, &arp);
        }

        beat_index += 1;
    }

    let rendered = track.into_pcm(MASTER_GAIN);
    let filtered = buffer::lowpass(&rendered, profile.lowpass_window());
    Ok(buffer::normalize(&filtered, TRACK_TARGET_PEAK))
}
