use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::MergeRequestState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: i64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneRef {
    pub id: i64,
    pub iid: i64,
    /// Empty when the pull request carried no title.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedMergeRequest {
    pub iid: i64,
    /// Empty when the pull request carried no title.
    pub title: String,
    pub description: String,
    pub source_project: ProjectRef,
    pub source_branch: String,
    pub head_source_sha: Option<String>,
    pub target_project: ProjectRef,
    pub target_branch: String,
    pub base_target_sha: Option<String>,
    pub state: MergeRequestState,
    pub milestone: Option<MilestoneRef>,
    pub author_id: i64,
    pub assignee_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    /// Absent only for a closed record that carries no `closed_at`.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes plus the cross-fork verdict. Check `valid` before persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub attributes: NormalizedMergeRequest,
    pub valid: bool,
}

impl Normalized {
    pub fn into_valid(self) -> Option<NormalizedMergeRequest> {
        self.valid.then_some(self.attributes)
    }
}
