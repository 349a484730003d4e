use crate::context::TargetProjectContext;
use crate::models::MilestoneRef;
use crate::payloads::{AssigneeRef, MilestonePayload};

/// Mapped internal id, or the project creator when the external user is
/// unknown. Used for authorship, which must always be set.
pub fn resolve_or_default<C>(ctx: &C, external_id: i64) -> i64
where
    C: TargetProjectContext + ?Sized,
{
    ctx.resolve_user_id(external_id).unwrap_or_else(|| ctx.creator_id())
}

/// Mapped internal id, or nothing.
pub fn resolve_or_absent<C>(ctx: &C, external_id: i64) -> Option<i64>
where
    C: TargetProjectContext + ?Sized,
{
    ctx.resolve_user_id(external_id)
}

pub fn resolve_assignee<C>(ctx: &C, assignee: Option<&AssigneeRef>) -> Option<i64>
where
    C: TargetProjectContext + ?Sized,
{
    assignee.and_then(|assignee| resolve_or_absent(ctx, assignee.id))
}

/// Existing project milestone with the same number. Never creates one.
pub fn resolve_milestone<C>(ctx: &C, milestone: Option<&MilestonePayload>) -> Option<MilestoneRef>
where
    C: TargetProjectContext + ?Sized,
{
    milestone.and_then(|milestone| ctx.find_milestone(milestone.number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubProject;

    #[test]
    fn author_falls_back_to_creator() {
        let project = StubProject::default().with_user(10, 100);
        assert_eq!(resolve_or_default(&project, 10), 100);
        assert_eq!(resolve_or_default(&project, 11), project.creator);
    }

    #[test]
    fn assignee_has_no_fallback() {
        let project = StubProject::default().with_user(10, 100);
        assert_eq!(resolve_assignee(&project, Some(&AssigneeRef { id: 10 })), Some(100));
        assert_eq!(resolve_assignee(&project, Some(&AssigneeRef { id: 11 })), None);
    }

    #[test]
    fn missing_assignee_skips_lookup() {
        let project = StubProject::default().with_user(10, 100);
        assert_eq!(resolve_assignee(&project, None), None);
        assert_eq!(project.user_lookups(), 0);
    }

    #[test]
    fn milestone_matches_by_number() {
        let project = StubProject::default().with_milestone(3, "v1.0");
        let found = resolve_milestone(&project, Some(&MilestonePayload { number: 3 }));
        assert_eq!(found.map(|m| m.title), Some("v1.0".to_string()));
        assert!(resolve_milestone(&project, Some(&MilestonePayload { number: 4 })).is_none());
        assert!(resolve_milestone(&project, None).is_none());
    }
}
