//! Scenario file location

use super::{ScenarioError, ScenarioResult};
use std::path::{Path, PathBuf};

/// Default locations tried when no path argument is given, relative to the
/// working directory (repository root or an app directory two levels down).
const DEFAULT_CANDIDATES: [&str; 2] = ["assets/s1/s1.json", "../../assets/s1/s1.json"];

/// Locate the scenario file.
///
/// An explicit argument wins: `~/` is expanded to the home directory and the
/// result canonicalized (the file must exist). Without an argument, the first
/// existing default candidate is used.
pub fn resolve_scenario_path(explicit: Option<PathBuf>) -> ScenarioResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_home(&path).canonicalize()?);
    }
    for candidate in DEFAULT_CANDIDATES {
        let candidate = PathBuf::from(candidate);
        if candidate.exists() {
            return Ok(candidate.canonicalize()?);
        }
    }
    Err(ScenarioError::ScenarioNotFound(
        DEFAULT_CANDIDATES.join(", "),
    ))
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_prefix_expands_to_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            expand_home(Path::new("~/scenario.json")),
            home.join("scenario.json")
        );
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(
            expand_home(Path::new("/tmp/s.json")),
            PathBuf::from("/tmp/s.json")
        );
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            resolve_scenario_path(Some(missing)),
            Err(ScenarioError::Io(_))
        ));
    }

    #[test]
    fn explicit_existing_file_resolves_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "{}").unwrap();
        let resolved = resolve_scenario_path(Some(path)).unwrap();
        assert!(resolved.is_absolute());
    }
}
