// Songsmith — procedural chord-chart songwriting generator.
//
// Generates a simple song skeleton: a chord progression for a verse and a
// chorus, arranged by a randomly chosen rhyme scheme, with song-level
// metadata (tempo, time signature, capo position), rendered as a plain-text
// chord chart.
//
// Architecture:
// - note.rs: The 12-tone chromatic scale — pitch classes, distance,
//   transposition, name parsing
// - chord.rs: Chord qualities (major/minor/seventh), the weighted quality
//   table, and guitar-ergonomics weighted root sampling
// - interval.rs: "Close" root transitions (whole steps, fourths, fifths)
// - compose.rs: Lines of chords and rhyme-scheme-driven verses
// - song.rs: Song assembly — verse, chorus, and metadata in one record
// - render.rs: Chord-chart text output (verse blocks, header, verbosity)
// - error.rs: Error kinds
//
// All randomness flows through a caller-supplied `rand::Rng`, so output is
// deterministic given a seed.

pub mod chord;
pub mod compose;
pub mod error;
pub mod interval;
pub mod note;
pub mod render;
pub mod song;
