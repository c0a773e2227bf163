use std::io::{self, BufRead, Write};

use cv_api::{load_conversation_from_json, Transcript};
use cv_core::TranscriptEntry;
use cv_runtime::DialogueEngine;

use crate::{map_play_io, CliError, LineCommandAction, LoadedConversation};

const HELP_TEXT: &str = "commands: :help :restart :quit  (enter = continue, number = choose option)";
const LINE_WIDTH: usize = 64;

pub(crate) struct PlaySession<'a> {
    pub(crate) conversation: &'a LoadedConversation,
    pub(crate) player_speaker: &'a str,
    pub(crate) engine: &'a mut DialogueEngine,
    pub(crate) transcript: &'a Transcript,
}

pub(crate) fn run_line_mode(session: PlaySession<'_>) -> Result<i32, CliError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_line_mode_with_io(session, &mut reader, &mut writer)
}

pub(crate) fn run_line_mode_with_io(
    session: PlaySession<'_>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, CliError> {
    let PlaySession {
        conversation,
        player_speaker,
        engine,
        transcript,
    } = session;

    writeln!(writer, "== {} ==", conversation.title).map_err(map_play_io)?;
    writeln!(writer, "{}", HELP_TEXT).map_err(map_play_io)?;
    flush_transcript(transcript, player_speaker, writer)?;

    while engine.is_active() {
        let Some(raw) = prompt_input_from("> ", reader, writer)? else {
            writeln!(writer).map_err(map_play_io)?;
            return Ok(0);
        };

        let mut emit = |line: String| writeln!(writer, "{}", line);
        let action = handle_line_command(raw.trim(), conversation, engine, &mut emit)?;
        match action {
            LineCommandAction::Continue => continue,
            LineCommandAction::Restarted | LineCommandAction::NotHandled => {}
            LineCommandAction::Quit => return Ok(0),
        }

        if action == LineCommandAction::NotHandled {
            if let Err(notice) = apply_input(raw.trim(), engine) {
                writeln!(writer, "{}", notice).map_err(map_play_io)?;
                continue;
            }
        }
        flush_transcript(transcript, player_speaker, writer)?;
    }

    Ok(0)
}

/// Blank input advances a line without options; a number picks an option.
/// Rejections come back as a notice to show, leaving the line in place.
pub(crate) fn apply_input(raw: &str, engine: &mut DialogueEngine) -> Result<(), String> {
    let current = engine
        .get_current_line()
        .ok_or_else(|| "conversation has ended".to_string())?;

    if raw.is_empty() {
        if current.has_options() {
            return Err(format!(
                "choose an option: 0..{}",
                current.options.len() - 1
            ));
        }
        return engine.advance(&current.main).map_err(|error| error.to_string());
    }

    let index = raw
        .parse::<usize>()
        .map_err(|_| format!("unknown input \"{}\", try :help", raw))?;
    engine.choose_option(index).map_err(|error| error.to_string())
}

pub(crate) fn handle_line_command(
    raw: &str,
    conversation: &LoadedConversation,
    engine: &mut DialogueEngine,
    emit: &mut dyn FnMut(String) -> io::Result<()>,
) -> Result<LineCommandAction, CliError> {
    match raw {
        ":help" => {
            emit(HELP_TEXT.to_string()).map_err(map_play_io)?;
            Ok(LineCommandAction::Continue)
        }
        ":restart" => {
            load_conversation_from_json(engine, &conversation.source)?;
            emit(format!("restarted: {}", conversation.path.display())).map_err(map_play_io)?;
            Ok(LineCommandAction::Restarted)
        }
        ":quit" => {
            emit("bye".to_string()).map_err(map_play_io)?;
            Ok(LineCommandAction::Quit)
        }
        _ => Ok(LineCommandAction::NotHandled),
    }
}

fn flush_transcript(
    transcript: &Transcript,
    player_speaker: &str,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    for entry in transcript.drain() {
        for line in render_entry(&entry, player_speaker) {
            writeln!(writer, "{}", line).map_err(map_play_io)?;
        }
    }
    writer.flush().map_err(map_play_io)
}

pub(crate) fn render_entry(entry: &TranscriptEntry, player_speaker: &str) -> Vec<String> {
    match entry {
        TranscriptEntry::Line {
            speaker,
            text,
            options,
        } => {
            let mut lines = vec![String::new(), render_speech(speaker, text, player_speaker)];
            for (index, option) in options.iter().enumerate() {
                lines.push(format!("  [{}] {}", index, option));
            }
            lines
        }
        TranscriptEntry::Message { text } => vec![format!("  * {}", text)],
        TranscriptEntry::Cleared => Vec::new(),
        TranscriptEntry::End => vec![String::new(), "[END]".to_string()],
    }
}

fn render_speech(speaker: &str, text: &str, player_speaker: &str) -> String {
    if speaker.is_empty() {
        return format!("  {}", text);
    }
    if speaker == player_speaker {
        return format!("{:>width$}", format!("{} :{}", text, speaker), width = LINE_WIDTH);
    }
    format!("{}: {}", speaker, text)
}

/// `None` once the reader is exhausted.
pub(crate) fn prompt_input_from(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<String>, CliError> {
    write!(writer, "{}", prefix).map_err(map_play_io)?;
    writer.flush().map_err(map_play_io)?;
    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(map_play_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

#[cfg(test)]
mod line_player_tests {
    use super::*;
    use crate::cli_test_support::*;
    use cv_api::record_transcript;

    fn play(source: &str, input: &str, player: &str) -> (i32, String) {
        let conversation = loaded(source);
        let mut engine = DialogueEngine::new();
        let transcript = record_transcript(&mut engine);
        load_conversation_from_json(&mut engine, &conversation.source).expect("load");

        let mut reader = io::Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let code = run_line_mode_with_io(
            PlaySession {
                conversation: &conversation,
                player_speaker: player,
                engine: &mut engine,
                transcript: &transcript,
            },
            &mut reader,
            &mut output,
        )
        .expect("play should pass");
        (code, String::from_utf8(output).expect("utf8 output"))
    }

    const CHAT: &str = r#"{
  "lines": [
    { "speaker": "Ada", "text": "Hello there." },
    { "speaker": "Player", "text": "Hi Ada.", "options": [
      { "text": "Ask about the map", "jump": "map", "message": "asked_map" },
      { "text": "Say goodbye", "jump": "end" }
    ] },
    { "label": "map", "text": "Ada unrolls a dusty map." }
  ],
  "end": { "message": "chat_over" }
}"#;

    #[test]
    fn enter_and_numbers_drive_the_conversation_to_end() {
        let (code, output) = play(CHAT, "\n0\n\n", "Player");
        assert_eq!(code, 0);
        assert!(output.contains("Ada: Hello there."));
        assert!(output.contains("  [0] Ask about the map"));
        assert!(output.contains("  [1] Say goodbye"));
        assert!(output.contains("  Ada unrolls a dusty map."));
        assert!(output.contains("  * asked_map"));
        assert!(output.contains("  * chat_over"));
        assert!(output.contains("[END]"));
    }

    #[test]
    fn player_lines_render_on_the_right() {
        let (_, output) = play(CHAT, "\n:quit\n", "Player");
        let player_line = output
            .lines()
            .find(|line| line.ends_with("Hi Ada. :Player"))
            .expect("player line should render");
        assert!(player_line.starts_with(' '));
        assert!(player_line.len() >= LINE_WIDTH - 2);

        let (_, output) = play(CHAT, "\n:quit\n", "Ada");
        assert!(output.contains("Player: Hi Ada."));
    }

    #[test]
    fn enter_on_branch_line_and_bad_input_show_notices() {
        let (code, output) = play(CHAT, "\n\nabc\n7\n1\n", "Player");
        assert_eq!(code, 0);
        assert!(output.contains("choose an option: 0..1"));
        assert!(output.contains("unknown input \"abc\""));
        assert!(output.contains("Option index 7 is out of range"));
        assert!(output.contains("[END]"));
        assert!(!output.contains("asked_map"));
    }

    #[test]
    fn commands_help_restart_and_quit() {
        let (code, output) = play(CHAT, ":help\n\n:restart\n:quit\n", "Player");
        assert_eq!(code, 0);
        assert!(output.matches(HELP_TEXT).count() >= 2);
        assert!(output.contains("restarted:"));
        assert_eq!(output.matches("Ada: Hello there.").count(), 2);
        assert!(output.contains("bye"));
        assert!(!output.contains("[END]"));
    }

    #[test]
    fn exhausted_input_stops_without_error() {
        let (code, output) = play(CHAT, "", "Player");
        assert_eq!(code, 0);
        assert!(output.contains("Ada: Hello there."));
    }

    #[test]
    fn render_entry_covers_every_kind() {
        assert!(render_entry(&TranscriptEntry::Cleared, "Player").is_empty());
        assert_eq!(
            render_entry(&TranscriptEntry::End, "Player"),
            vec![String::new(), "[END]".to_string()]
        );
        assert_eq!(
            render_entry(
                &TranscriptEntry::Message {
                    text: "m".to_string()
                },
                "Player"
            ),
            vec!["  * m".to_string()]
        );
    }
}
