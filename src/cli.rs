//! Command-line options for the terminal game.

use std::path::PathBuf;

use clap::Parser;

use crate::app::Settings;
use crate::core::GameConfig;
use crate::types::{Difficulty, MISMATCH_REVEAL_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "memory-match")]
#[command(about = "Flip cards two at a time and find every pair")]
pub struct Cli {
    /// Name recorded in the history log
    #[arg(short, long, default_value = "Player")]
    pub player: String,

    /// Board size: easy (2x3), medium (3x4) or hard (4x4)
    #[arg(short, long, default_value = "easy", value_parser = parse_difficulty)]
    pub difficulty: String,

    /// Seed for dealing; random when omitted
    #[arg(long)]
    pub seed: Option<u32>,

    /// How long a mismatched pair stays face up, in milliseconds
    #[arg(long, default_value_t = MISMATCH_REVEAL_MS)]
    pub reveal_ms: u32,

    /// Append logs to this file (the terminal itself is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default().with_mismatch_reveal_ms(self.reveal_ms)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            player: self.player.clone(),
            difficulty: self.difficulty.clone(),
        }
    }
}

fn parse_difficulty(s: &str) -> Result<String, String> {
    Difficulty::from_name(s)
        .map(|d| d.name.to_string())
        .ok_or_else(|| format!("unknown difficulty `{s}` (expected easy, medium or hard)"))
}
