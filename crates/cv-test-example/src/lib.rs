use std::path::PathBuf;

use walkdir::WalkDir;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos").join("conversations")
}

pub fn demo_dir(name: &str) -> PathBuf {
    demos_root().join(name)
}

pub fn testcase_path(name: &str) -> PathBuf {
    demo_dir(name).join("testcase.json")
}

/// Demo directory names in sorted order.
pub fn demo_names() -> Vec<String> {
    WalkDir::new(demos_root())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_points_to_workspace() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }

    #[test]
    fn demos_root_points_to_demo_directory() {
        assert!(demos_root().is_dir());
    }

    #[test]
    fn demo_dir_joins_name() {
        assert!(demo_dir("01-sequential").is_dir());
    }

    #[test]
    fn testcase_path_joins_default_filename() {
        let path = testcase_path("01-sequential");
        assert!(path.ends_with("testcase.json"));
        assert!(path.is_file());
    }

    #[test]
    fn demo_names_lists_every_demo_in_order() {
        let names = demo_names();
        assert!(names.len() >= 4);
        assert_eq!(names[0], "01-sequential");
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
