// The 12-tone chromatic scale.
//
// A note is a pitch class: an index into the fixed name table below. Identity
// is positional, not textual — distance and transposition are wraparound
// arithmetic on the index, mod 12. Octaves don't exist here; a chord chart
// only needs pitch classes.

use crate::error::SongError;
use serde::{Serialize, Serializer};
use std::fmt;

/// The 12 pitch-class names, in semitone order starting from A.
pub const NOTE_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// A pitch class: an index 0..12 into `NOTE_NAMES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note(u8);

impl Note {
    /// Build a note from a raw index. Indices wrap mod 12, so any `u8` maps
    /// to a valid pitch class.
    pub fn from_index(index: u8) -> Self {
        Note(index % 12)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Parse a note name, case-insensitively ("a#" and "A#" are the same
    /// pitch class). Fails on anything outside the 12 recognized names.
    pub fn parse(name: &str) -> Result<Note, SongError> {
        NOTE_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| Note(i as u8))
            .ok_or_else(|| SongError::InvalidNote(name.to_string()))
    }

    /// Semitone distance from `self` up to `other`, always in 0..12.
    pub fn distance(self, other: Note) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Transpose by a signed semitone offset, wrapping mod 12.
    pub fn transpose(self, semitones: i8) -> Note {
        let idx = (self.0 as i16 + semitones as i16).rem_euclid(12);
        Note(idx as u8)
    }

    /// All 12 pitch classes in table order.
    pub fn all() -> impl Iterator<Item = Note> {
        (0..12).map(Note)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Semitone distance between two note names, `(index(b) - index(a)) mod 12`.
/// Fails with `InvalidNote` if either name is unrecognized.
pub fn note_distance(a: &str, b: &str) -> Result<u8, SongError> {
    Ok(Note::parse(a)?.distance(Note::parse(b)?))
}
