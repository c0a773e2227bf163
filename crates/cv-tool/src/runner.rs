use std::path::Path;

use cv_api::record_transcript;
use cv_runtime::DialogueEngine;

use crate::source::{decode_conversation, read_conversation_from_dir, read_test_case};
use crate::{CvToolError, ExpectedEvent, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub observed_events: Vec<ExpectedEvent>,
    pub consumed_actions: usize,
    pub ended: bool,
}

/// Plays the conversation in `demo_dir`, spending one action per active line until it ends.
pub fn run_case(demo_dir: &Path, case: &TestCase) -> Result<RunReport, CvToolError> {
    let (path, source) = read_conversation_from_dir(demo_dir)?;
    let conversation = decode_conversation(&source)?;
    log::debug!("running testcase against {}", path.display());

    let mut engine = DialogueEngine::new();
    let transcript = record_transcript(&mut engine);
    engine.load(conversation)?;

    let mut action_index = 0usize;
    while let Some(line_index) = engine.current_index() {
        let action = case
            .actions
            .get(action_index)
            .ok_or_else(|| CvToolError::MissingAction {
                event_index: transcript.len().saturating_sub(1),
                line_index,
            })?;
        engine.select((*action).into())?;
        action_index += 1;
    }

    if action_index != case.actions.len() {
        return Err(CvToolError::UnusedActions {
            used: action_index,
            total: case.actions.len(),
        });
    }

    Ok(RunReport {
        observed_events: transcript
            .drain()
            .into_iter()
            .map(ExpectedEvent::from)
            .collect(),
        consumed_actions: action_index,
        ended: !engine.is_active(),
    })
}

pub fn assert_case(demo_dir: &Path, case_path: &Path) -> Result<(), CvToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(demo_dir, &case)?;

    if report.observed_events.len() != case.expected_events.len() {
        let observed = serde_json::to_string_pretty(&report.observed_events)
            .map_err(CvToolError::EventSerialize)?;
        return Err(CvToolError::EventCountMismatch {
            expected: case.expected_events.len(),
            actual: report.observed_events.len(),
            observed,
        });
    }

    for (index, (expected, actual)) in case
        .expected_events
        .iter()
        .zip(report.observed_events.iter())
        .enumerate()
    {
        if expected != actual {
            let expected = serde_json::to_string(expected).map_err(CvToolError::EventSerialize)?;
            let actual = serde_json::to_string(actual).map_err(CvToolError::EventSerialize)?;
            return Err(CvToolError::EventMismatch {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
