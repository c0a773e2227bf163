use clap::{Args, Parser, Subcommand};
use cv_core::Selection;

pub(crate) const DEFAULT_PLAYER_SPEAKER: &str = "Player";

#[derive(Debug, Parser)]
#[command(name = "cv-cli")]
#[command(about = "Branching conversation player")]
pub(crate) struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub(crate) log_level: String,
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Play(PlayArgs),
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub(crate) struct PlayArgs {
    #[arg(long = "conversation")]
    pub(crate) conversation: String,
    #[arg(long = "player-speaker", default_value = DEFAULT_PLAYER_SPEAKER)]
    pub(crate) player_speaker: String,
}

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    #[arg(long = "conversation")]
    pub(crate) conversation: String,
    /// `main` or an option index, applied in order.
    #[arg(long = "select")]
    pub(crate) selections: Vec<Selection>,
}
