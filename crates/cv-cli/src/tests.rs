use super::*;
use crate::cli_test_support::*;

#[test]
fn invalid_arguments_return_clap_exit_code() {
    assert_eq!(run_cli_from_args(["cv-cli"]), 2);
    assert_eq!(
        run_cli_from_args(["cv-cli", "run", "--conversation", "x", "--select", "left"]),
        2
    );
}

#[test]
fn run_mode_succeeds_on_bundled_demo() {
    let code = run_cli_from_args([
        "cv-cli",
        "run",
        "--conversation",
        demo_path("03-end-label").as_str(),
        "--select",
        "main",
    ]);
    assert_eq!(code, 0);
}

#[test]
fn run_mode_maps_failures_to_exit_code_one() {
    let missing = temp_path("missing-dir");
    let code = run_cli_from_args([
        "cv-cli",
        "run",
        "--conversation",
        &*missing.to_string_lossy(),
    ]);
    assert_eq!(code, 1);

    let broken = temp_path("broken.conversation.json");
    write_file(&broken, r#"{"lines":[{"label":"a","text":"1"},{"label":"a","text":"2"}]}"#);
    let code = run_cli_from_args([
        "cv-cli",
        "run",
        "--conversation",
        &*broken.to_string_lossy(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn run_events_reports_selection_after_end() {
    let error = run_events(RunArgs {
        conversation: demo_path("03-end-label"),
        selections: vec![cv_core::Selection::Main, cv_core::Selection::Main],
    })
    .expect_err("extra selection should fail");
    assert_eq!(error.code, "CLI_SELECTION_AFTER_END");
}

#[test]
fn run_events_reports_parse_errors() {
    let path = temp_path("garbage.conversation.json");
    write_file(&path, "{ not json");
    let error = run_events(RunArgs {
        conversation: path.to_string_lossy().to_string(),
        selections: Vec::new(),
    })
    .expect_err("garbage should fail");
    assert_eq!(error.code, "ENGINE_PARSE");
}

#[test]
fn cli_args_parse_selections_and_defaults() {
    let cli = Cli::try_parse_from([
        "cv-cli",
        "--log-level",
        "debug",
        "run",
        "--conversation",
        "demo",
        "--select",
        "main",
        "--select",
        "2",
    ])
    .expect("args should parse");
    assert_eq!(cli.log_level, "debug");
    match cli.command {
        Mode::Run(args) => {
            assert_eq!(args.conversation, "demo");
            assert_eq!(
                args.selections,
                vec![
                    cv_core::Selection::Main,
                    cv_core::Selection::Option { index: 2 }
                ]
            );
        }
        Mode::Play(_) => panic!("expected run mode"),
    }

    let cli = Cli::try_parse_from(["cv-cli", "play", "--conversation", "demo"])
        .expect("args should parse");
    assert_eq!(cli.log_level, "warn");
    match cli.command {
        Mode::Play(args) => assert_eq!(args.player_speaker, cli_args::DEFAULT_PLAYER_SPEAKER),
        Mode::Run(_) => panic!("expected play mode"),
    }
}
