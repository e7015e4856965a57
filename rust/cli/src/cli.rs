//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "drawpoker",
    version,
    about = "Heads-up five-card draw against a computer opponent"
)]
pub struct DrawpokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively against an AI opponent
    Play {
        /// Number of rounds to play (default: 1)
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent policy: random, passive or baseline
        #[arg(long)]
        ai: Option<String>,
    },
    /// Let two policies play each other and report the result
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Policy for the player seat
        #[arg(long, default_value = "baseline")]
        ai_a: String,
        /// Policy for the opponent seat
        #[arg(long, default_value = "random")]
        ai_b: String,
        /// Append round records as JSON lines
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one round and show both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate five cards, e.g. `eval Ah Kh Qh Jh 10h`
    Eval {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_subcommands_parse() {
        let commands = vec![
            vec!["drawpoker", "cfg"],
            vec!["drawpoker", "play"],
            vec!["drawpoker", "play", "--hands", "3", "--seed", "1", "--ai", "passive"],
            vec!["drawpoker", "sim", "--rounds", "10"],
            vec!["drawpoker", "deal", "--seed", "7"],
            vec!["drawpoker", "eval", "Ah", "Kh", "Qh", "Jh", "10h"],
        ];
        for args in commands {
            assert!(
                DrawpokerCli::try_parse_from(&args).is_ok(),
                "Failed to parse: {:?}",
                args
            );
        }
    }

    #[test]
    fn sim_requires_rounds() {
        assert!(DrawpokerCli::try_parse_from(["drawpoker", "sim"]).is_err());
    }

    #[test]
    fn sim_policy_defaults() {
        let cli = DrawpokerCli::try_parse_from(["drawpoker", "sim", "--rounds", "1"]).unwrap();
        match cli.cmd {
            Commands::Sim { ai_a, ai_b, .. } => {
                assert_eq!(ai_a, "baseline");
                assert_eq!(ai_b, "random");
            }
            other => panic!("Expected Commands::Sim, got {:?}", other),
        }
    }
}
