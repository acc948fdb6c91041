// Chord-chart text rendering.
//
// Pure string assembly from a finished `Song` — the model never stores its
// own presentation. A section renders as a labeled block, one line per chord
// line with names joined by " - ":
//
//   [chorus]
//   Am - C - G7
//   E - Am - D
//
// At the default verbosity the chart shows the header plus one verse and one
// chorus block. At higher verbosity the full arrangement is laid out:
// introductory verses first, then alternating verse/chorus pairs up to the
// total verse count.

use crate::compose::Verse;
use crate::song::Song;

/// Render one section as a labeled block ("verse" or "chorus").
pub fn format_verse(verse: &Verse, label: &str) -> String {
    let mut block = vec![format!("[{label}]")];
    for line in &verse.lines {
        let names: Vec<String> = line.chords.iter().map(|c| c.name()).collect();
        block.push(names.join(" - "));
    }
    block.join("\n")
}

/// Render the whole chart at the given verbosity level.
pub fn render_song(song: &Song, verbosity: u8) -> String {
    let mut blocks = vec![song.header().join("\n")];
    if verbosity == 0 {
        blocks.push(format_verse(&song.verse, "verse"));
        blocks.push(format_verse(&song.chorus, "chorus"));
    } else {
        for _ in 0..song.num_introductory_verses {
            blocks.push(format_verse(&song.verse, "verse"));
        }
        for _ in song.num_introductory_verses..song.num_verses {
            blocks.push(format_verse(&song.verse, "verse"));
            blocks.push(format_verse(&song.chorus, "chorus"));
        }
    }
    blocks.join("\n\n")
}
