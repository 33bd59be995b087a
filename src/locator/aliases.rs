//! Legacy version aliases
//!
//! Some tool builds self-report a version that differs from the revision the
//! repository packages them under. Requests naming a reported version are
//! translated to the canonical repository revision before any matching, with
//! no diagnostic. Alias hits are exempt from the minimum-version floor: the
//! canonical fork revision predates the floor and is still valid.

use crate::revision::Revision;

/// Reported version -> canonical repository revision.
const VERSION_ALIASES: &[(&str, &str)] = &[
    // the forked 3.6 build reports itself as 3.6.0-rc2
    ("3.6.0-rc2", "3.6.4111459"),
];

/// Looks up the canonical revision for a requested version.
pub fn canonical_revision(requested: &Revision) -> Option<Revision> {
    let raw = requested.to_string();
    VERSION_ALIASES
        .iter()
        .find(|(reported, _)| *reported == raw)
        .and_then(|(_, canonical)| canonical.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_entry_is_well_formed() {
        for (reported, canonical) in VERSION_ALIASES {
            assert!(reported.parse::<Revision>().is_ok(), "bad key {reported}");
            assert!(canonical.parse::<Revision>().is_ok(), "bad value {canonical}");
        }
    }

    #[test]
    fn fork_reported_version_maps_to_repository_revision() {
        let requested: Revision = "3.6.0-rc2".parse().unwrap();
        assert_eq!(canonical_revision(&requested), Some(Revision::of(3, 6, 4111459)));
    }

    #[test]
    fn ordinary_revisions_have_no_alias() {
        let requested: Revision = "3.10.2".parse().unwrap();
        assert_eq!(canonical_revision(&requested), None);
    }
}
