use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{map_cli_source_path, map_cli_source_read, CliError, LoadedConversation};

const CONVERSATION_SUFFIX: &str = ".conversation.json";

/// Accepts a document path or a directory holding exactly one `*.conversation.json`.
pub(crate) fn load_conversation_source(raw: &str) -> Result<LoadedConversation, CliError> {
    let path = resolve_conversation_path(raw)?;
    let source = fs::read_to_string(&path).map_err(map_cli_source_read)?;
    let title = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.trim_end_matches(CONVERSATION_SUFFIX).to_string())
        .unwrap_or_else(|| "conversation".to_string());
    log::info!("loaded {} ({} bytes)", path.display(), source.len());

    Ok(LoadedConversation {
        path,
        title,
        source,
    })
}

pub(crate) fn resolve_conversation_path(raw: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(raw);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(map_cli_source_path)?
            .join(path)
    };

    if !absolute.exists() {
        return Err(CliError::new(
            "CLI_SOURCE_NOT_FOUND",
            format!("conversation does not exist: {}", absolute.display()),
        ));
    }

    if absolute.is_dir() {
        return find_conversation_in_dir(&absolute);
    }

    Ok(absolute)
}

pub(crate) fn find_conversation_in_dir(dir: &Path) -> Result<PathBuf, CliError> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
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
        0 => Err(CliError::new(
            "CLI_SOURCE_EMPTY",
            format!("No {} file under {}", CONVERSATION_SUFFIX, dir.display()),
        )),
        1 => Ok(found.remove(0)),
        count => Err(CliError::new(
            "CLI_SOURCE_AMBIGUOUS",
            format!(
                "Expected one {} file under {}, found {}",
                CONVERSATION_SUFFIX,
                dir.display(),
                count
            ),
        )),
    }
}

#[cfg(test)]
mod source_loader_tests {
    use super::*;
    use crate::cli_test_support::*;

    #[test]
    fn resolve_conversation_path_reports_missing_path() {
        let missing = temp_path("missing.conversation.json");
        let error = resolve_conversation_path(missing.to_string_lossy().as_ref())
            .expect_err("missing path should fail");
        assert_eq!(error.code, "CLI_SOURCE_NOT_FOUND");
    }

    #[test]
    fn resolve_conversation_path_accepts_file_or_directory() {
        let root = temp_path("dir-source");
        let file = root.join("tavern.conversation.json");
        write_file(&file, r#"{"lines":[]}"#);
        write_file(&root.join("testcase.json"), "{}");

        let from_file = resolve_conversation_path(file.to_string_lossy().as_ref())
            .expect("file should resolve");
        assert_eq!(from_file, file);
        let from_dir = resolve_conversation_path(root.to_string_lossy().as_ref())
            .expect("directory should resolve");
        assert_eq!(from_dir, file);
    }

    #[test]
    fn find_conversation_in_dir_rejects_empty_and_ambiguous_dirs() {
        let empty = temp_path("empty-source");
        write_file(&empty.join("readme.txt"), "nothing");
        let error = find_conversation_in_dir(&empty).expect_err("empty should fail");
        assert_eq!(error.code, "CLI_SOURCE_EMPTY");

        let ambiguous = temp_path("ambiguous-source");
        write_file(&ambiguous.join("a.conversation.json"), "{}");
        write_file(&ambiguous.join("b.conversation.json"), "{}");
        let error = find_conversation_in_dir(&ambiguous).expect_err("ambiguous should fail");
        assert_eq!(error.code, "CLI_SOURCE_AMBIGUOUS");
    }

    #[test]
    fn load_conversation_source_reads_content_and_title() {
        let root = temp_path("load-source");
        write_file(&root.join("gate.conversation.json"), r#"{"lines":[{"text":"Hi"}]}"#);

        let loaded = load_conversation_source(root.to_string_lossy().as_ref())
            .expect("load should pass");
        assert_eq!(loaded.title, "gate");
        assert!(loaded.path.ends_with("gate.conversation.json"));
        assert!(loaded.source.contains("\"Hi\""));
    }

    #[test]
    fn load_conversation_source_resolves_bundled_demo() {
        let loaded = load_conversation_source(&demo_path("02-branching"))
            .expect("demo should load");
        assert_eq!(loaded.title, "main");
    }
}
