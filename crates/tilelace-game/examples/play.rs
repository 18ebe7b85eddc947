//! Example demonstrating an interactive puzzle session on the terminal.
//!
//! This example shows how to:
//! - Create a seeded `Shuffler` and a `Game` session
//! - Translate text commands into `PuzzleEvent` values
//! - Surface the once-per-episode solved notification
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Reproducible shuffles with a fixed seed:
//!
//! ```sh
//! cargo run --example play -- --seed 42
//! ```
//!
//! Commands at the prompt: a slot number 0-8 slides that tile, `s`
//! shuffles, `i` changes the image, `w` is the instant win, `q` quits.

use std::io::{self, BufRead as _, Write as _};

use clap::Parser;
use tilelace_game::{Game, GameError, ImageId, PuzzleEvent};
use tilelace_generator::Shuffler;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for reproducible shuffles; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn parse_event(line: &str) -> Option<PuzzleEvent> {
    match line {
        "s" => Some(PuzzleEvent::Shuffle),
        "i" => Some(PuzzleEvent::ChangeImage(ImageId::new("demo-image"))),
        "w" => Some(PuzzleEvent::Solve),
        _ => {
            let slot: u8 = line.parse().ok().filter(|slot| *slot < 9)?;
            Some(PuzzleEvent::TileSelected(tilelace_core::CellIndex::new(
                slot,
            )))
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut shuffler = args.seed.map_or_else(Shuffler::new, Shuffler::with_seed);
    let mut game = Game::new(&mut shuffler);

    let stdin = io::stdin();
    println!("{}", game.board());
    loop {
        print!("> ");
        io::stdout().flush().expect("stdout is writable");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("stdin is readable") == 0 {
            break;
        }
        let line = line.trim();
        if line == "q" {
            break;
        }
        let Some(event) = parse_event(line) else {
            println!("commands: 0-8 move, s shuffle, i image, w win, q quit");
            continue;
        };

        match game.handle(event, &mut shuffler) {
            Ok(Some(notification)) => println!("*** {notification:?}! ***"),
            Ok(None) => {}
            Err(GameError::Move(err)) => println!("ignored: {err}"),
            Err(err) => println!("error: {err}"),
        }
        println!("{}", game.board());
    }
}
