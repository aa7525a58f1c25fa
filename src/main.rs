//! Fussball headless driver
//!
//! Runs a match at a fixed tick rate without a window. With `--demo` the
//! human side is played by an AI as well; otherwise the human team stands
//! still and the computer flails at it.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;

use fussball::highscores::format_duration;
use fussball::sim::{GameEvent, GameLogic, Score};
use fussball::{HighScores, Settings};

#[derive(Parser, Debug)]
#[command(name = "fussball", version, about = "Headless table football match")]
struct Cli {
    /// Settings JSON file; defaults are used when absent
    settings: Option<PathBuf>,
    /// High score file to record a human win in
    highscores: Option<PathBuf>,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Let an AI play the human side
    #[arg(long)]
    demo: bool,
    /// Name recorded on the high score board
    #[arg(long)]
    name: Option<String>,
    /// Sleep between ticks instead of running flat out
    #[arg(long)]
    realtime: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = match &self.settings {
            Some(path) => Settings::load_or_default(path),
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(name) = self.name.as_ref().filter(|n| !n.trim().is_empty()) {
            settings.player_name = name.clone();
        }
        settings.demo_mode |= self.demo;
        settings.realtime |= self.realtime;
        settings
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Fussball (headless) starting...");

    let settings = cli.settings();
    let mut logic = GameLogic::new(&settings);
    let period = Duration::from_millis(settings.tick_interval_ms);

    for n in 1..=settings.max_ticks {
        for event in logic.tick(n) {
            match event {
                GameEvent::Goal {
                    scorer,
                    human,
                    computer,
                } => println!("Goal for {scorer:?}: Human {human} - {computer} Computer"),
                GameEvent::GameOver { winner, .. } => {
                    let millis = logic.state().time_ticks() * settings.tick_interval_ms;
                    println!(
                        "{winner:?} wins after {}",
                        format_duration(millis as f64 / 1000.0)
                    );
                }
            }
        }
        if logic.state().is_game_over() {
            break;
        }
        if settings.realtime {
            thread::sleep(period);
        }
    }

    let Some(summary) = logic.state().summary() else {
        log::warn!(
            "No winner after {} ticks (Human {} - {} Computer)",
            settings.max_ticks,
            logic.state().human_score(),
            logic.state().computer_score()
        );
        return;
    };
    log::info!("Match summary: {summary:?}");

    if summary.winner != Score::Human {
        return;
    }
    let Some(path) = cli.highscores else {
        return;
    };
    let mut scores = match HighScores::load(&path) {
        Ok(scores) => scores,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    // Game time, so a flat-out run ranks the same as a realtime one
    let seconds = summary.simulated_seconds(settings.tick_interval_ms);
    if let Some(rank) = scores.add_score(&settings.player_name, seconds) {
        println!("New high score for {}! Rank {rank}", settings.player_name);
        if let Err(e) = scores.save(&path) {
            log::error!("{e}");
        }
    }
}
