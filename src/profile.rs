//! Mood profiles: the fixed musical identity table behind the synthesizer.
//!
//! Each mood maps to an immutable profile (tempo, root pitch, scale, chord
//! progression). The table is the engine's only configuration; chords and
//! beat timing derive from it at render time and are never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoodMixError;

// ── Mood ────────────────────────────────────────────────────

/// The five built-in moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Chill,
    Energetic,
    Dark,
}

impl Mood {
    /// All moods, in presentation order. Matches the index order of the
    /// profile table.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Chill,
        Mood::Energetic,
        Mood::Dark,
    ];

    /// The lowercase name used for lookup and display.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Dark => "dark",
        }
    }

    /// The immutable profile behind this mood.
    pub fn profile(&self) -> &'static MoodProfile {
        &PROFILES[*self as usize]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = MoodMixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| MoodMixError::UnknownMood {
                name: s.to_string(),
            })
    }
}

// ── Profile ─────────────────────────────────────────────────

/// An immutable mood profile: tempo, key, scale, and chord progression.
#[derive(Debug, Clone, Serialize)]
pub struct MoodProfile {
    /// Mood this profile belongs to.
    pub mood: Mood,
    /// Tempo in beats per minute.
    pub bpm: u32,
    /// Root pitch as a MIDI note number.
    pub root: i32,
    /// Semitone offsets from the root, indexed modulo length.
    pub scale: &'static [i32],
    /// Scale-degree indices, one chord per entry, cycled beat by beat.
    pub progression: &'static [usize],
    /// Accent color (CSS hex) for presentation shells.
    pub accent: &'static str,
}

/// The fixed profile table. Index order matches `Mood::ALL`.
static PROFILES: [MoodProfile; 5] = [
    MoodProfile {
        mood: Mood::Happy,
        bpm: 118,
        root: 60,
        scale: &[0, 2, 4, 5, 7, 9, 11],
        progression: &[0, 4, 5, 3],
        accent: "#F97316",
    },
    MoodProfile {
        mood: Mood::Sad,
        bpm: 84,
        root: 57,
        scale: &[0, 2, 3, 5, 7, 8, 10],
        progression: &[0, 5, 3, 4],
        accent: "#3B82F6",
    },
    MoodProfile {
        mood: Mood::Chill,
        bpm: 92,
        root: 62,
        scale: &[0, 2, 3, 5, 7, 9, 10],
        progression: &[0, 3, 4, 3],
        accent: "#14B8A6",
    },
    MoodProfile {
        mood: Mood::Energetic,
        bpm: 132,
        root: 64,
        scale: &[0, 2, 4, 5, 7, 9, 11],
        progression: &[0, 5, 4, 5],
        accent: "#EF4444",
    },
    MoodProfile {
        mood: Mood::Dark,
        bpm: 78,
        root: 50,
        scale: &[0, 1, 3, 5, 7, 8, 10],
        progression: &[0, 6, 5, 4],
        accent: "#8B5CF6",
    },
];

impl MoodProfile {
    /// Look up a profile by mood name; fails with `UnknownMood` for
    /// anything outside the fixed table.
    pub fn named(name: &str) -> Result<&'static MoodProfile, MoodMixError> {
        Ok(name.parse::<Mood>()?.profile())
    }

    /// Seconds per beat at this profile's tempo.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.bpm as f64
    }

    /// Chords of the progression, in order, one per degree.
    pub fn chords(&self) -> Vec<Chord> {
        self.progression
            .iter()
            .map(|&degree| Chord::from_degree(self.root, self.scale, degree))
            .collect()
    }

    /// Moving-average window applied after rendering. Mellow moods get a
    /// wider window for a softer top end.
    pub fn lowpass_window(&self) -> usize {
        match self.mood {
            Mood::Chill | Mood::Sad | Mood::Dark => 4,
            Mood::Happy | Mood::Energetic => 2,
        }
    }

    /// Whether even-numbered beats carry an off-beat arpeggio tone.
    pub fn arpeggiated(&self) -> bool {
        matches!(self.mood, Mood::Energetic | Mood::Happy)
    }
}

// ── Chord ───────────────────────────────────────────────────

/// A triad derived from a scale degree: even degrees take a minor third
/// (+3 semitones), odd degrees a major third (+4); the fifth is always +7.
/// Chords are built on demand from a profile and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: i32,
    pub third: i32,
    pub fifth: i32,
}

impl Chord {
    /// Build the chord for `degree` of `scale` above `root`. The degree
    /// indexes the scale modulo its length.
    pub fn from_degree(root: i32, scale: &[i32], degree: usize) -> Chord {
        let chord_root = root + scale[degree % scale.len()];
        Chord {
            root: chord_root,
            third: chord_root + 3 + (degree % 2) as i32,
            fifth: chord_root + 7,
        }
    }

    /// Chord tones in play order (root, third, fifth).
    pub fn notes(&self) -> [i32; 3] {
        [self.root, self.third, self.fifth]
    }

    /// The bass note: chord root one octave down.
    pub fn bass(&self) -> i32 {
        self.root - 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_mood_all() {
        for mood in Mood::ALL {
            assert_eq!(mood.profile().mood, mood);
        }
    }

    #[test]
    fn every_profile_is_playable() {
        for mood in Mood::ALL {
            let p = mood.profile();
            assert!(p.bpm > 0, "{mood} has no tempo");
            assert!(!p.scale.is_empty(), "{mood} has an empty scale");
            assert!(!p.progression.is_empty(), "{mood} has an empty progression");
            assert!(
                p.scale.iter().all(|&s| (0..12).contains(&s)),
                "{mood} scale offsets must stay within one octave"
            );
        }
    }

    #[test]
    fn mood_names_round_trip() {
        for mood in Mood::ALL {
            let parsed: Mood = mood.name().parse().unwrap();
            assert_eq!(parsed, mood);
        }
    }

    #[test]
    fn unknown_mood_is_rejected() {
        let err = MoodProfile::named("metal").unwrap_err();
        assert!(matches!(err, MoodMixError::UnknownMood { .. }));
        let message = err.to_string();
        assert!(
            message.contains("happy") && message.contains("dark"),
            "error should list the valid moods: {message}"
        );
    }

    #[test]
    fn chord_third_follows_degree_parity() {
        let scale = &[0, 2, 4, 5, 7, 9, 11];
        let even = Chord::from_degree(60, scale, 0);
        assert_eq!(even.notes(), [60, 63, 67], "even degree takes a minor third");
        let odd = Chord::from_degree(60, scale, 3);
        assert_eq!(odd.notes(), [65, 69, 72], "odd degree takes a major third");
    }

    #[test]
    fn chord_degree_wraps_modulo_scale() {
        let scale = &[0, 2, 4, 5, 7, 9, 11];
        let wrapped = Chord::from_degree(60, scale, 7);
        // Degree 7 wraps to scale[0] but keeps its odd parity.
        assert_eq!(wrapped.notes(), [60, 64, 67]);
    }

    #[test]
    fn bass_sits_an_octave_below_root() {
        let chord = Chord::from_degree(57, &[0, 2, 3, 5, 7, 8, 10], 0);
        assert_eq!(chord.bass(), chord.root - 12);
    }

    #[test]
    fn happy_progression_chords() {
        let chords = Mood::Happy.profile().chords();
        assert_eq!(chords.len(), 4);
        assert_eq!(chords[0].notes(), [60, 63, 67]);
        assert_eq!(chords[1].notes(), [67, 70, 74]);
        assert_eq!(chords[2].notes(), [69, 73, 76]);
        assert_eq!(chords[3].notes(), [65, 69, 72]);
    }

    #[test]
    fn beat_seconds_from_bpm() {
        let p = Mood::Sad.profile();
        assert!((p.beat_seconds() - 60.0 / 84.0).abs() < 1e-12);
    }

    #[test]
    fn lowpass_window_by_mood() {
        assert_eq!(Mood::Chill.profile().lowpass_window(), 4);
        assert_eq!(Mood::Sad.profile().lowpass_window(), 4);
        assert_eq!(Mood::Dark.profile().lowpass_window(), 4);
        assert_eq!(Mood::Happy.profile().lowpass_window(), 2);
        assert_eq!(Mood::Energetic.profile().lowpass_window(), 2);
    }

    #[test]
    fn arpeggio_moods() {
        assert!(Mood::Happy.profile().arpeggiated());
        assert!(Mood::Energetic.profile().arpeggiated());
        assert!(!Mood::Chill.profile().arpeggiated());
    }

    #[test]
    fn profile_serializes_for_the_boundary() {
        let value = serde_json::to_value(Mood::Happy.profile()).unwrap();
        assert_eq!(value["mood"], "happy");
        assert_eq!(value["bpm"], 118);
        assert_eq!(value["root"], 60);
        assert_eq!(value["progression"][1], 4);
        assert_eq!(value["accent"], "#F97316");
    }
}
