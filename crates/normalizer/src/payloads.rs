use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;

/// A pull request as returned by the pulls API. Field names follow the wire
/// format; only what the importer reads is decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequest {
    pub number: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "user")]
    pub author: UserRef,
    #[serde(default)]
    pub assignee: Option<AssigneeRef>,
    #[serde(default)]
    pub milestone: Option<MilestonePayload>,
    pub head: BranchRef,
    pub base: BranchRef,
    pub state: PullRequestStatus,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RawPullRequest {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestStatus {
    Open,
    Closed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssigneeRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MilestonePayload {
    pub number: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub repo: Option<RepoRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    pub id: i64,
}
