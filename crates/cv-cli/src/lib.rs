use std::ffi::OsString;

use clap::Parser;
use cv_api::{load_conversation_from_json, record_transcript};
use cv_runtime::DialogueEngine;

mod cli_args;
mod error_map;
mod event_runner;
mod line_player;
mod logging;
mod models;
mod source_loader;

pub(crate) use cli_args::{Cli, Mode, PlayArgs, RunArgs};
pub(crate) use error_map::{
    emit_error, json_string, map_cli_source_path, map_cli_source_read, map_play_io, CliError,
};
pub(crate) use event_runner::{emit_run, run_selections};
pub(crate) use line_player::{run_line_mode, PlaySession};
pub(crate) use models::{LineCommandAction, LoadedConversation, RunOutcome};
pub(crate) use source_loader::load_conversation_source;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    logging::init_logging(&cli.log_level);
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Mode::Play(args) => run_play(args),
        Mode::Run(args) => run_events(args),
    }
}

fn run_play(args: PlayArgs) -> Result<i32, CliError> {
    let conversation = load_conversation_source(&args.conversation)?;
    let mut engine = DialogueEngine::new();
    let transcript = record_transcript(&mut engine);
    load_conversation_from_json(&mut engine, &conversation.source)?;

    run_line_mode(PlaySession {
        conversation: &conversation,
        player_speaker: &args.player_speaker,
        engine: &mut engine,
        transcript: &transcript,
    })
}

fn run_events(args: RunArgs) -> Result<i32, CliError> {
    let conversation = load_conversation_source(&args.conversation)?;
    let mut engine = DialogueEngine::new();
    let transcript = record_transcript(&mut engine);
    load_conversation_from_json(&mut engine, &conversation.source)?;

    let outcome = run_selections(&mut engine, &transcript, &args.selections)?;
    emit_run(&outcome);
    Ok(0)
}

#[cfg(test)]
pub(crate) mod cli_test_support {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::LoadedConversation;

    pub(crate) fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("conversation-rs-{}-{}", nanos, name))
    }

    pub(crate) fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent should be created");
        }
        fs::write(path, content).expect("file should be written");
    }

    pub(crate) fn demo_path(name: &str) -> String {
        cv_test_example::demo_dir(name).to_string_lossy().to_string()
    }

    pub(crate) fn loaded(source: &str) -> LoadedConversation {
        LoadedConversation {
            path: PathBuf::from("inline.conversation.json"),
            title: "inline".to_string(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
