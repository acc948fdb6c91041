// Line and verse composition.
//
// A line is a short run of chords whose roots chain through close intervals.
// A verse is a handful of lines arranged by a rhyme scheme: each distinct
// letter in the scheme gets one freshly generated line, and a repeated letter
// reuses that line rather than regenerating it. That reuse is what makes the
// output read as a song section instead of a chord soup.

use crate::chord::{Chord, GuitarWeights, QualityTable};
use crate::error::SongError;
use crate::interval::next_root;
use crate::note::Note;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// The rhyme/repetition patterns a verse can take.
pub const SCHEMES: [&str; 5] = ["abba", "abab", "abcb", "abb", "aba"];

/// An ordered run of chords, one chart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Line {
    pub chords: Vec<Chord>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// A verse: the scheme that shaped it and its lines, repeats included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verse {
    pub scheme: &'static str,
    pub lines: Vec<Line>,
}

/// Generate one line of `length` chords.
///
/// With a seed root, the first chord's root is one close-interval step away
/// from it; without one, the first root is sampled from the guitar weights.
/// Each later root chains from the previous, and every root then goes through
/// the quality table.
pub fn make_line(
    length: usize,
    seed_root: Option<Note>,
    qualities: &QualityTable,
    guitar: &GuitarWeights,
    rng: &mut impl Rng,
) -> Result<Line, SongError> {
    if length == 0 {
        return Err(SongError::InvalidConfiguration(
            "a line needs at least one chord".to_string(),
        ));
    }

    let mut roots = Vec::with_capacity(length);
    roots.push(match seed_root {
        Some(seed) => next_root(seed, rng),
        None => guitar.sample(rng),
    });
    while roots.len() < length {
        let prev = *roots.last().unwrap();
        roots.push(next_root(prev, rng));
    }

    let chords: Vec<Chord> = roots
        .into_iter()
        .map(|root| qualities.apply(root, rng))
        .collect();
    Ok(Line { chords })
}

/// Generate a verse: pick a scheme uniformly, generate one line per distinct
/// letter, reuse lines where letters repeat.
pub fn make_verse(
    chords_per_line: usize,
    seed_root: Option<Note>,
    qualities: &QualityTable,
    guitar: &GuitarWeights,
    rng: &mut impl Rng,
) -> Result<Verse, SongError> {
    let scheme = SCHEMES[rng.random_range(0..SCHEMES.len())];
    debug!("verse scheme: {scheme}");

    // Scheme letters are contiguous from 'a', so a small slot table suffices.
    let mut unique: Vec<(char, Line)> = Vec::new();
    let mut lines = Vec::with_capacity(scheme.len());
    for letter in scheme.chars() {
        let line = match unique.iter().find(|(l, _)| *l == letter) {
            Some((_, line)) => line.clone(),
            None => {
                let line = make_line(chords_per_line, seed_root, qualities, guitar, rng)?;
                unique.push((letter, line.clone()));
                line
            }
        };
        lines.push(line);
    }

    Ok(Verse { scheme, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn majors_only() -> QualityTable {
        use crate::chord::{Quality, QualitySpec};
        QualityTable::new(vec![QualitySpec {
            quality: Quality::Major,
            weight: 1.0,
            offset: 0,
            suffix: "",
        }])
        .unwrap()
    }

    #[test]
    fn test_line_has_requested_length() {
        let qualities = QualityTable::default();
        let guitar = GuitarWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for length in 1..=6 {
            let line = make_line(length, None, &qualities, &guitar, &mut rng).unwrap();
            assert_eq!(line.len(), length);
        }
    }

    #[test]
    fn test_zero_length_line_is_rejected() {
        let qualities = QualityTable::default();
        let guitar = GuitarWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            make_line(0, None, &qualities, &guitar, &mut rng),
            Err(SongError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_seeded_line_starts_a_close_interval_from_seed() {
        // With a majors-only table the quality step can't move roots, so the
        // first chord's root must sit one close interval from the seed.
        let qualities = majors_only();
        let guitar = GuitarWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let seed = Note::parse("E").unwrap();
        for _ in 0..500 {
            let line = make_line(3, Some(seed), &qualities, &guitar, &mut rng).unwrap();
            let first = line.chords[0].root;
            assert!(crate::interval::CLOSE_INTERVALS.contains(&seed.distance(first)));
        }
    }

    #[test]
    fn test_chained_roots_move_by_close_intervals() {
        let qualities = majors_only();
        let guitar = GuitarWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..200 {
            let line = make_line(4, None, &qualities, &guitar, &mut rng).unwrap();
            for pair in line.chords.windows(2) {
                let step = pair[0].root.distance(pair[1].root);
                assert!(crate::interval::CLOSE_INTERVALS.contains(&step));
            }
        }
    }

    #[test]
    fn test_verse_matches_its_scheme() {
        let qualities = QualityTable::default();
        let guitar = GuitarWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..300 {
            let verse = make_verse(3, None, &qualities, &guitar, &mut rng).unwrap();
            assert!(SCHEMES.contains(&verse.scheme));
            assert_eq!(verse.lines.len(), verse.scheme.len());

            // Repeated letters reuse the same line content.
            for (letter, line) in verse.scheme.chars().zip(&verse.lines) {
                let first_pos = verse.scheme.chars().position(|c| c == letter).unwrap();
                assert_eq!(line, &verse.lines[first_pos]);
            }

            // Distinct lines may collide by chance on short lines, but never
            // exceed the distinct-letter count.
            let distinct_letters: HashSet<char> = verse.scheme.chars().collect();
            let distinct_lines: HashSet<String> = verse
                .lines
                .iter()
                .map(|l| serde_json::to_string(l).unwrap())
                .collect();
            assert!(distinct_lines.len() <= distinct_letters.len());
        }
    }
}
