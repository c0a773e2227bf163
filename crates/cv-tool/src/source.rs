use std::fs;
use std::path::{Path, PathBuf};

use cv_core::Conversation;
use walkdir::WalkDir;

use crate::{CvToolError, TestCase, TESTCASE_SCHEMA_V1};

const CONVERSATION_SUFFIX: &str = ".conversation.json";

pub fn find_conversation_file(demo_dir: &Path) -> Result<PathBuf, CvToolError> {
    let mut found: Vec<PathBuf> = WalkDir::new(demo_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .ends_with(CONVERSATION_SUFFIX)
        })
        .map(|entry| entry.into_path())
        .collect();

    match found.len() {
        0 => Err(CvToolError::SourceEmpty {
            path: demo_dir.to_path_buf(),
        }),
        1 => Ok(found.remove(0)),
        count => Err(CvToolError::SourceAmbiguous {
            path: demo_dir.to_path_buf(),
            count,
        }),
    }
}

pub fn read_conversation_from_dir(demo_dir: &Path) -> Result<(PathBuf, String), CvToolError> {
    let path = find_conversation_file(demo_dir)?;
    let content = fs::read_to_string(&path).map_err(|source| CvToolError::ReadFile {
        path: path.clone(),
        source,
    })?;
    Ok((path, content))
}

pub(crate) fn decode_conversation(source: &str) -> Result<Conversation, CvToolError> {
    cv_api::parse_conversation_json(source).map_err(CvToolError::Engine)
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, CvToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| CvToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| CvToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(CvToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}
