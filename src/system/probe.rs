//! Revision probe that runs the tool binary and parses its reported version
//!
//! A directory is probed by executing `<dir>/<tool> --version` and scanning
//! the first output line for a revision token. A directory without the
//! binary reports `Ok(None)`; a binary that cannot be executed, exits
//! nonzero, or prints no recognizable version is a probe fault.

use std::path::Path;
use std::process::Command;

use crate::locator::probes::{ProbeError, RevisionProbe};
use crate::revision::Revision;

pub struct CommandProbe {
    executable: String,
}

impl CommandProbe {
    pub fn new(tool: impl Into<String>) -> Self {
        let tool = tool.into();
        let executable = if cfg!(windows) {
            format!("{tool}.exe")
        } else {
            tool
        };
        Self { executable }
    }
}

impl RevisionProbe for CommandProbe {
    fn revision_at(&self, dir: &Path) -> Result<Option<Revision>, ProbeError> {
        let binary = dir.join(&self.executable);
        if !binary.is_file() {
            return Ok(None);
        }
        tracing::debug!("probing '{}' for its version", binary.display());
        let output = Command::new(&binary).arg("--version").output()?;
        if !output.status.success() {
            return Err(ProbeError::UnreadableVersion);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_reported_version(&stdout) {
            Some(revision) => Ok(Some(revision)),
            None => Err(ProbeError::UnreadableVersion),
        }
    }
}

/// Extracts the revision from version output such as
/// `cmake version 3.10.2`: the first whitespace-separated token on the
/// first line that parses as a revision.
fn parse_reported_version(output: &str) -> Option<Revision> {
    output
        .lines()
        .next()?
        .split_whitespace()
        .find_map(|token| token.parse::<Revision>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cmake version 3.10.2", Some(Revision::of(3, 10, 2)))]
    #[case("mytool 3.6.4111459", Some(Revision::of(3, 6, 4111459)))]
    #[case("version 3.12.0\nextra line", Some(Revision::of(3, 12, 0)))]
    #[case("no version here", None)]
    #[case("", None)]
    fn parses_reported_versions(#[case] output: &str, #[case] expected: Option<Revision>) {
        assert_eq!(parse_reported_version(output), expected);
    }

    #[test]
    fn directory_without_binary_probes_to_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let probe = CommandProbe::new("mytool");

        assert!(probe.revision_at(temp_dir.path()).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn executable_reporting_a_version_is_probed() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let binary = temp_dir.path().join("mytool");
        std::fs::write(&binary, "#!/bin/sh\necho \"mytool version 3.12.0\"\n").unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();

        let probe = CommandProbe::new("mytool");

        assert_eq!(
            probe.revision_at(temp_dir.path()).unwrap(),
            Some(Revision::of(3, 12, 0))
        );
    }

    #[cfg(unix)]
    #[test]
    fn executable_with_unreadable_output_is_a_probe_fault() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let binary = temp_dir.path().join("mytool");
        std::fs::write(&binary, "#!/bin/sh\necho \"no version output\"\n").unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();

        let probe = CommandProbe::new("mytool");

        assert!(matches!(
            probe.revision_at(temp_dir.path()),
            Err(ProbeError::UnreadableVersion)
        ));
    }
}
