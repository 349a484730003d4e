pub mod branch;
pub mod context;
pub mod errors;
pub mod identity;
pub mod models;
pub mod payloads;
pub mod state;
pub mod transform;

pub use context::TargetProjectContext;
pub use errors::NormalizerError;
pub use models::{MilestoneRef, Normalized, NormalizedMergeRequest, ProjectRef};
pub use payloads::{PullRequestStatus, RawPullRequest};
pub use state::MergeRequestState;
pub use transform::{is_valid, normalize, PullRequestFormatter};

#[cfg(test)]
pub(crate) mod test_support;
