// Close root transitions.
//
// Chord progressions stay "close" by moving the root through a small set of
// guitar-friendly intervals: a whole step up (two fifths), up a fourth (a
// fifth down), up a fifth, or a whole step down (two fifths down). Everything
// is mod 12, so a transition can never leave the 12-note set.

use crate::note::Note;
use rand::Rng;

/// Semitone offsets considered musically close between chord roots.
pub const CLOSE_INTERVALS: [u8; 4] = [
    2,  // whole step up (two fifths up)
    5,  // fourth (fifth down)
    7,  // fifth
    10, // whole step down (two fifths down)
];

/// Uniformly pick one close interval.
pub fn close_interval(rng: &mut impl Rng) -> u8 {
    CLOSE_INTERVALS[rng.random_range(0..CLOSE_INTERVALS.len())]
}

/// Step from a previous root to the next one along a random close interval.
pub fn next_root(prev: Note, rng: &mut impl Rng) -> Note {
    prev.transpose(close_interval(rng) as i8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_next_root_moves_by_a_close_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for start in Note::all() {
            for _ in 0..200 {
                let next = next_root(start, &mut rng);
                assert!(
                    CLOSE_INTERVALS.contains(&start.distance(next)),
                    "{start} -> {next} is not a close interval"
                );
            }
        }
    }

    #[test]
    fn test_all_intervals_are_drawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let iv = close_interval(&mut rng);
            let pos = CLOSE_INTERVALS.iter().position(|&c| c == iv).unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
