// Chords and chord qualities.
//
// A chord is a root pitch class plus one quality tag. Quality is chosen by a
// single weighted draw over a quality table — each entry carries its
// selection weight, the semitone relation applied to the root (the minor tag
// drops the root 3 semitones to its relative minor), and the display
// abbreviation. The table is data, not logic, so alternative probability
// tables plug in without touching the selection code.
//
// Also here: the guitar ergonomics table. Open-position chords are not all
// equally playable, so root notes for fresh lines are sampled from a weighted
// distribution favoring A, C, D, E and G.

use crate::error::SongError;
use crate::note::Note;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// Chord flavor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Seventh,
}

/// One row of a quality table: how often a tag is picked, how it moves the
/// root, and how it prints.
#[derive(Debug, Clone, Copy)]
pub struct QualitySpec {
    pub quality: Quality,
    /// Relative selection weight. Weights need not sum to 1.
    pub weight: f64,
    /// Semitone offset applied to the root when this tag is chosen.
    pub offset: i8,
    /// Display suffix appended to the root name.
    pub suffix: &'static str,
}

/// Weighted quality vocabulary: one entry per tag, one draw per chord.
#[derive(Debug, Clone)]
pub struct QualityTable {
    entries: Vec<QualitySpec>,
}

impl QualityTable {
    /// Build a table from explicit entries. Fails on an empty table or a
    /// non-positive weight, which would make the draw degenerate.
    pub fn new(entries: Vec<QualitySpec>) -> Result<Self, SongError> {
        if entries.is_empty() {
            return Err(SongError::InvalidConfiguration(
                "quality table has no entries".to_string(),
            ));
        }
        if let Some(bad) = entries.iter().find(|e| !(e.weight > 0.0)) {
            return Err(SongError::InvalidConfiguration(format!(
                "quality {:?} has non-positive weight {}",
                bad.quality, bad.weight
            )));
        }
        Ok(QualityTable { entries })
    }

    pub fn entries(&self) -> &[QualitySpec] {
        &self.entries
    }

    /// Turn a root note into a chord: one weighted draw over the table, then
    /// apply the chosen tag's semitone relation to the root.
    pub fn apply(&self, root: Note, rng: &mut impl Rng) -> Chord {
        let weights: Vec<f64> = self.entries.iter().map(|e| e.weight).collect();
        let spec = self.entries[weighted_index(rng, &weights)];
        Chord {
            root: root.transpose(spec.offset),
            quality: spec.quality,
            suffix: spec.suffix,
        }
    }
}

impl Default for QualityTable {
    /// The canonical table: plain major dominates, minor close behind
    /// (shifted to the relative minor), sevenths as occasional color.
    fn default() -> Self {
        QualityTable {
            entries: vec![
                QualitySpec {
                    quality: Quality::Major,
                    weight: 0.45,
                    offset: 0,
                    suffix: "",
                },
                QualitySpec {
                    quality: Quality::Minor,
                    weight: 0.40,
                    offset: -3,
                    suffix: "m",
                },
                QualitySpec {
                    quality: Quality::Seventh,
                    weight: 0.15,
                    offset: 0,
                    suffix: "7",
                },
            ],
        }
    }
}

/// A root pitch class with its quality tag, as it appears on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: Note,
    pub quality: Quality,
    pub suffix: &'static str,
}

impl Chord {
    /// The chart name, root + suffix ("Am", "E7", "C").
    pub fn name(&self) -> String {
        format!("{}{}", self.root.name(), self.suffix)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.name(), self.suffix)
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Ergonomic commonality of each root on a guitar, indexed by pitch class.
/// Used only as a sampling distribution; relative magnitudes are what matter.
#[derive(Debug, Clone)]
pub struct GuitarWeights {
    weights: [f64; 12],
}

impl GuitarWeights {
    pub fn weight(&self, note: Note) -> f64 {
        self.weights[note.index() as usize]
    }

    /// Sample a root from the 12 pitch classes, proportional to weight.
    pub fn sample(&self, rng: &mut impl Rng) -> Note {
        Note::from_index(weighted_index(rng, &self.weights) as u8)
    }
}

impl Default for GuitarWeights {
    fn default() -> Self {
        // A A# B C C# D D# E F F# G G#
        GuitarWeights {
            weights: [
                1.0, 0.2, 0.2, 1.0, 0.2, 1.0, 0.2, 1.0, 0.8, 0.2, 1.0, 0.2,
            ],
        }
    }
}

/// Weighted index draw: cumulative scan over unnormalized weights.
fn weighted_index(rng: &mut impl Rng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let mut x = rng.random_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        if x < w {
            return i;
        }
        x -= w;
    }
    // Floating-point slack can walk past the last bucket.
    weights.len() - 1
}
