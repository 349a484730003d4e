use common::text::{char_prefix, is_hex};
use tracing::{debug, warn};

use crate::context::TargetProjectContext;
use crate::payloads::BranchRef;

/// Characters of the commit sha appended to a branch that no longer exists.
pub const SHORT_SHA_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSide {
    Source,
    Target,
}

impl BranchSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchSide::Source => "source",
            BranchSide::Target => "target",
        }
    }
}

/// Short form of a commit sha. An absent or empty sha yields an empty string;
/// non-hex input is still truncated but logged.
pub fn short_sha(sha: Option<&str>) -> &str {
    match sha {
        None | Some("") => {
            warn!("missing commit sha, branch suffix will be empty");
            ""
        }
        Some(sha) => {
            if !is_hex(sha) {
                warn!(sha, "commit sha is not hexadecimal");
            }
            char_prefix(sha, SHORT_SHA_LEN)
        }
    }
}

pub fn disambiguated_name(ref_name: &str, sha: Option<&str>) -> String {
    format!("{}-{}", ref_name, short_sha(sha))
}

/// Keeps the ref when the target repository still has it, otherwise
/// suffixes it with the short sha so the record never points at a dangling
/// branch.
pub fn resolve_branch<C>(ctx: &C, side: BranchSide, branch: &BranchRef) -> String
where
    C: TargetProjectContext + ?Sized,
{
    if ctx.branch_exists(&branch.ref_name) {
        return branch.ref_name.clone();
    }

    let resolved = disambiguated_name(&branch.ref_name, branch.sha.as_deref());
    debug!(
        side = side.as_str(),
        ref_name = %branch.ref_name,
        resolved = %resolved,
        "branch missing in target repository"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubProject;

    fn branch(ref_name: &str, sha: Option<&str>) -> BranchRef {
        BranchRef {
            ref_name: ref_name.into(),
            sha: sha.map(Into::into),
            repo: None,
        }
    }

    #[test]
    fn existing_branch_is_kept_verbatim() {
        let project = StubProject::default().with_branches(&["feature-x"]);
        let resolved = resolve_branch(
            &project,
            BranchSide::Source,
            &branch("feature-x", Some("abcdef1234567890")),
        );
        assert_eq!(resolved, "feature-x");
    }

    #[test]
    fn missing_branch_gets_short_sha_suffix() {
        let project = StubProject::default();
        let resolved = resolve_branch(
            &project,
            BranchSide::Source,
            &branch("feature-x", Some("abcdef1234567890")),
        );
        assert_eq!(resolved, "feature-x-abcdef1");
        assert!(resolved.starts_with("feature-x-"));
        assert_eq!(resolved.len(), "feature-x-".len() + SHORT_SHA_LEN);
    }

    #[test]
    fn missing_sha_degrades_to_empty_suffix() {
        let project = StubProject::default();
        assert_eq!(
            resolve_branch(&project, BranchSide::Target, &branch("main", None)),
            "main-"
        );
        assert_eq!(
            resolve_branch(&project, BranchSide::Target, &branch("main", Some(""))),
            "main-"
        );
    }

    #[test]
    fn short_sha_keeps_shorter_input() {
        assert_eq!(short_sha(Some("abc")), "abc");
    }

    #[test]
    fn non_hex_sha_is_still_truncated() {
        assert_eq!(short_sha(Some("not-a-real-sha")), "not-a-r");
    }
}
