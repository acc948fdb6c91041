// Song assembly.
//
// One call draws the song-level parameters, then generates the verse and the
// chorus from a shared seed root. The shared root keeps the two sections in a
// related harmonic neighborhood while their schemes and lines stay
// independent. The record is immutable once built; rendering and
// serialization derive from it.
//
// Draw order (fixed for seeded reproducibility): introductory verse count,
// chords per line, seed root, total verse count, capo coin then capo value,
// time signature, tempo, verse, chorus.

use crate::chord::{GuitarWeights, QualityTable};
use crate::compose::{Verse, make_verse};
use crate::error::SongError;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// The time signatures a song can carry.
pub const TIME_SIGNATURES: [&str; 2] = ["4/4", "3/4"];

/// A generated song: two sections plus chart metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    /// Verses rendered before the first chorus.
    pub num_introductory_verses: u8,
    pub num_chords_per_line: usize,
    /// Total verse count, at least 4 and never below the introductory count.
    pub num_verses: u8,
    pub time_signature: &'static str,
    /// Beats per minute, in [50, 120).
    pub tempo: u16,
    pub verse: Verse,
    pub chorus: Verse,
    /// Fret-clamp position, 1..7, or absent. Informational only.
    pub capo: Option<u8>,
}

impl Song {
    /// Generate a complete song from the given tables and random source.
    pub fn generate(
        qualities: &QualityTable,
        guitar: &GuitarWeights,
        rng: &mut impl Rng,
    ) -> Result<Song, SongError> {
        let num_introductory_verses: u8 = rng.random_range(0..2);
        let num_chords_per_line: usize = rng.random_range(2..5);
        let seed_root = guitar.sample(rng);
        let num_verses: u8 = rng.random_range(num_introductory_verses.max(4)..6);
        let capo = if rng.random_bool(0.5) {
            Some(rng.random_range(1..7u8))
        } else {
            None
        };
        let time_signature = TIME_SIGNATURES[rng.random_range(0..TIME_SIGNATURES.len())];
        let tempo: u16 = rng.random_range(50..120);
        debug!(
            "song parameters: seed root {seed_root}, {num_chords_per_line} chords/line, \
             {num_verses} verses ({num_introductory_verses} introductory), \
             {time_signature} at {tempo} BPM, capo {capo:?}"
        );

        // Two independent sections sharing only the seed root.
        let verse = make_verse(num_chords_per_line, Some(seed_root), qualities, guitar, rng)?;
        let chorus = make_verse(num_chords_per_line, Some(seed_root), qualities, guitar, rng)?;

        Ok(Song {
            num_introductory_verses,
            num_chords_per_line,
            num_verses,
            time_signature,
            tempo,
            verse,
            chorus,
            capo,
        })
    }

    /// The chart header lines: time signature, tempo, verse counts, and the
    /// capo when present.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec![
            format!("Time signature: {}", self.time_signature),
            format!("Tempo: {} BPM", self.tempo),
            format!(
                "{} introductory verses (verses not followed by a chorus)",
                self.num_introductory_verses
            ),
            format!("{} verses total", self.num_verses),
        ];
        if let Some(capo) = self.capo {
            header.push(format!("Capo {capo}"));
        }
        header
    }
}
