use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payloads::{PullRequestStatus, RawPullRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeRequestState {
    Opened,
    Closed,
    Merged,
}

impl MergeRequestState {
    /// A closed pull request with a merge timestamp counts as merged; any
    /// non-closed status is opened.
    pub fn derive(raw: &RawPullRequest) -> Self {
        match (raw.state, raw.merged_at) {
            (PullRequestStatus::Closed, Some(_)) => MergeRequestState::Merged,
            (PullRequestStatus::Closed, None) => MergeRequestState::Closed,
            _ => MergeRequestState::Opened,
        }
    }

    /// The event timestamp matching this state. The remote `updated_at` lags
    /// behind close and merge events, so it is only used for open records.
    pub fn timestamp(&self, raw: &RawPullRequest) -> Option<DateTime<Utc>> {
        match self {
            MergeRequestState::Merged => raw.merged_at,
            MergeRequestState::Closed => raw.closed_at,
            MergeRequestState::Opened => Some(raw.updated_at),
        }
    }
}
