// Songsmith CLI entry point.
//
// Generates one song per invocation and prints it as a chord chart (or as
// JSON with --json). With --seed the output is fully reproducible; without
// it the generator is seeded from OS entropy.
//
// Usage:
//   songsmith [-v | -vv] [--seed N] [--json]
//
// -v prints the full verse/chorus arrangement instead of one block of each;
// -vv additionally raises logging to debug so generation decisions show up
// on stderr.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use songsmith::chord::{GuitarWeights, QualityTable};
use songsmith::render::render_song;
use songsmith::song::Song;

#[derive(Debug, Parser)]
#[command(name = "songsmith", version, about = "Procedural chord-chart songwriting generator")]
struct Cli {
    /// Verbose output (-v: full arrangement, -vv: generation tracing)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// RNG seed (same seed => same song)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the song as JSON instead of a chord chart
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    // Extra `v`s clamp to the highest defined level.
    let verbosity = cli.verbose.min(2);
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let qualities = QualityTable::default();
    let guitar = GuitarWeights::default();
    let song = match Song::generate(&qualities, &guitar, &mut rng) {
        Ok(song) => song,
        Err(e) => {
            eprintln!("Failed to generate song: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string(&song) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize song: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!();
        println!("{}", render_song(&song, verbosity));
    }
}
