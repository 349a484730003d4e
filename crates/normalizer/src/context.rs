use crate::models::{MilestoneRef, ProjectRef};

/// Read-only view of the project a pull request is imported into.
///
/// Implementations must answer consistently for the duration of one
/// normalization call and must not mutate anything on lookup.
pub trait TargetProjectContext: Send + Sync {
    fn project(&self) -> ProjectRef;

    fn creator_id(&self) -> i64;

    fn branch_exists(&self, ref_name: &str) -> bool;

    /// Maps an external user id to an internal one.
    fn resolve_user_id(&self, external_id: i64) -> Option<i64>;

    /// Looks up a milestone of this project by its external number.
    fn find_milestone(&self, number: i64) -> Option<MilestoneRef>;
}
