use std::collections::{HashMap, HashSet};

use common::{AppError, Result};
use normalizer::{MilestoneRef, ProjectRef, TargetProjectContext};
use serde::Deserialize;

/// Point-in-time copy of the target project's state, read from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSnapshot {
    pub project: ProjectRef,
    pub creator_id: i64,
    #[serde(default)]
    pub branches: HashSet<String>,
    /// External user id to internal user id.
    #[serde(default)]
    pub users: HashMap<i64, i64>,
    #[serde(default)]
    pub milestones: Vec<MilestoneRef>,
}

impl ProjectSnapshot {
    pub async fn load(path: &str) -> Result<Self> {
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| AppError::io(path, err))?;
        serde_json::from_str(&data).map_err(AppError::payload)
    }
}

impl TargetProjectContext for ProjectSnapshot {
    fn project(&self) -> ProjectRef {
        self.project.clone()
    }

    fn creator_id(&self) -> i64 {
        self.creator_id
    }

    fn branch_exists(&self, ref_name: &str) -> bool {
        self.branches.contains(ref_name)
    }

    fn resolve_user_id(&self, external_id: i64) -> Option<i64> {
        self.users.get(&external_id).copied()
    }

    fn find_milestone(&self, number: i64) -> Option<MilestoneRef> {
        self.milestones.iter().find(|m| m.iid == number).cloned()
    }
}
