//! Revision value type for tool versions
//!
//! A revision is up to three dotted numeric components plus an optional
//! pre-release label, e.g. `3`, `3.12`, `3.6.4111459`, `3.6.0-rc2`. Partial
//! revisions stay partial: `3.12` and `3.12.0` are ordered the same but are
//! not equal, so candidate matching can require the exact form a caller
//! asked for.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An immutable, comparable tool revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision {
    major: u32,
    minor: Option<u32>,
    micro: Option<u32>,
    preview: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("revision '{0}' is not formatted correctly")]
pub struct ParseRevisionError(pub String);

impl Revision {
    /// Builds a full three-component revision with no pre-release label.
    pub const fn of(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            micro: Some(micro),
            preview: None,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }
}

impl FromStr for Revision {
    type Err = ParseRevisionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRevisionError(raw.to_string());

        let (numeric, preview) = match raw.split_once('-') {
            Some((numeric, label)) => (numeric, Some(label)),
            None => (raw, None),
        };
        if let Some(label) = preview {
            if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(malformed());
            }
        }

        let mut components = numeric.split('.').map(|part| part.parse::<u32>());
        let major = components.next().ok_or_else(malformed)?.map_err(|_| malformed())?;
        let minor = components.next().transpose().map_err(|_| malformed())?;
        let micro = components.next().transpose().map_err(|_| malformed())?;
        if components.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            major,
            minor,
            micro,
            preview: preview.map(str::to_string),
        })
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(micro) = self.micro {
            write!(f, ".{micro}")?;
        }
        if let Some(preview) = &self.preview {
            write!(f, "-{preview}")?;
        }
        Ok(())
    }
}

impl Ord for Revision {
    /// Lexicographic over numeric components, with absent components ranked
    /// as zero. A pre-release sorts below the plain revision it precedes.
    /// Presence of a component breaks remaining ties so that ordering stays
    /// consistent with equality (`3.7` sorts just below `3.7.0`).
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.unwrap_or(0).cmp(&other.minor.unwrap_or(0)))
            .then(self.micro.unwrap_or(0).cmp(&other.micro.unwrap_or(0)))
            .then_with(|| match (&self.preview, &other.preview) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then(self.minor.is_some().cmp(&other.minor.is_some()))
            .then(self.micro.is_some().cmp(&other.micro.is_some()))
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rev(raw: &str) -> Revision {
        raw.parse().unwrap()
    }

    #[rstest]
    #[case("3")]
    #[case("3.12")]
    #[case("3.6.4111459")]
    #[case("3.6.0-rc2")]
    #[case("10.0.1-beta1")]
    fn parse_then_display_is_identity(#[case] raw: &str) {
        assert_eq!(rev(raw).to_string(), raw);
    }

    #[rstest]
    #[case("3.bob")]
    #[case("")]
    #[case("bob")]
    #[case("3.6.0.2")] // four numeric components
    #[case("3.6.0-")] // empty label
    #[case("3.6.0-rc 2")] // whitespace in label
    #[case("-rc2")]
    #[case("3..6")]
    fn malformed_revisions_fail_to_parse(#[case] raw: &str) {
        assert_eq!(raw.parse::<Revision>(), Err(ParseRevisionError(raw.to_string())));
    }

    #[rstest]
    #[case("3.2", "3.7.0")]
    #[case("2.2", "3.7.0")]
    #[case("3.6.4111459", "3.7.0")]
    #[case("3.6.0-rc2", "3.6.0")] // pre-release below plain revision
    #[case("3.7", "3.7.0")] // partial sorts just below full
    #[case("3.9.9", "3.10.0")] // numeric, not lexical, components
    fn ordering_cases(#[case] lower: &str, #[case] higher: &str) {
        assert!(rev(lower) < rev(higher));
    }

    #[test]
    fn partial_and_full_revisions_are_not_equal() {
        assert_ne!(rev("3.12"), rev("3.12.0"));
        assert_eq!(rev("3.12"), rev("3.12"));
    }

    #[test]
    fn preview_distinguishes_revisions() {
        assert_ne!(rev("3.6.0-rc2"), rev("3.6.0"));
        assert_eq!(rev("3.6.0-rc2").preview(), Some("rc2"));
    }

    #[test]
    fn of_builds_a_full_revision() {
        assert_eq!(Revision::of(3, 6, 4111459), rev("3.6.4111459"));
        assert_eq!(Revision::of(3, 7, 0).major(), 3);
    }
}
