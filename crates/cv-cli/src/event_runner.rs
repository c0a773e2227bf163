use cv_api::Transcript;
use cv_core::{Selection, TranscriptEntry};
use cv_runtime::DialogueEngine;

use crate::{json_string, CliError, RunOutcome};

/// Applies `selections` in order and collects everything observed since `transcript` was attached.
pub(crate) fn run_selections(
    engine: &mut DialogueEngine,
    transcript: &Transcript,
    selections: &[Selection],
) -> Result<RunOutcome, CliError> {
    for (position, selection) in selections.iter().enumerate() {
        if !engine.is_active() {
            return Err(CliError::new(
                "CLI_SELECTION_AFTER_END",
                format!(
                    "Selection #{} (\"{}\") given after the conversation ended; {} left unused.",
                    position + 1,
                    selection,
                    selections.len() - position
                ),
            ));
        }
        log::debug!("applying selection {}", selection);
        engine.select(*selection)?;
    }

    Ok(RunOutcome {
        entries: transcript.drain(),
        ended: !engine.is_active(),
    })
}

pub(crate) fn render_run_lines(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = vec!["RESULT:OK".to_string()];

    for entry in &outcome.entries {
        match entry {
            TranscriptEntry::Line {
                speaker,
                text,
                options,
            } => {
                lines.push("EVENT:LINE".to_string());
                lines.push(format!("SPEAKER_JSON:{}", json_string(speaker)));
                lines.push(format!("TEXT_JSON:{}", json_string(text)));
                for (index, option) in options.iter().enumerate() {
                    lines.push(format!("OPTION:{}|{}", index, json_string(option)));
                }
            }
            TranscriptEntry::Cleared => lines.push("EVENT:CLEARED".to_string()),
            TranscriptEntry::End => lines.push("EVENT:END".to_string()),
            TranscriptEntry::Message { text } => {
                lines.push("EVENT:MESSAGE".to_string());
                lines.push(format!("MESSAGE_JSON:{}", json_string(text)));
            }
        }
    }

    lines.push(if outcome.ended {
        "STATE:ENDED".to_string()
    } else {
        "STATE:ACTIVE".to_string()
    });
    lines
}

pub(crate) fn emit_run(outcome: &RunOutcome) {
    for line in render_run_lines(outcome) {
        println!("{}", line);
    }
}
