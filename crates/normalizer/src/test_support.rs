use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::context::TargetProjectContext;
use crate::models::{MilestoneRef, ProjectRef};

pub struct StubProject {
    pub creator: i64,
    branches: HashSet<String>,
    users: HashMap<i64, i64>,
    milestones: Vec<MilestoneRef>,
    branch_checks: AtomicUsize,
    user_lookups: AtomicUsize,
}

impl Default for StubProject {
    fn default() -> Self {
        Self {
            creator: 1,
            branches: HashSet::new(),
            users: HashMap::new(),
            milestones: Vec::new(),
            branch_checks: AtomicUsize::new(0),
            user_lookups: AtomicUsize::new(0),
        }
    }
}

impl StubProject {
    pub fn with_branches(mut self, names: &[&str]) -> Self {
        self.branches.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_user(mut self, external: i64, internal: i64) -> Self {
        self.users.insert(external, internal);
        self
    }

    pub fn with_milestone(mut self, number: i64, title: &str) -> Self {
        self.milestones.push(MilestoneRef {
            id: 500 + number,
            iid: number,
            title: title.into(),
        });
        self
    }

    pub fn branch_checks(&self) -> usize {
        self.branch_checks.load(Ordering::SeqCst)
    }

    pub fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }
}

impl TargetProjectContext for StubProject {
    fn project(&self) -> ProjectRef {
        ProjectRef {
            id: 42,
            path: "group/project".into(),
        }
    }

    fn creator_id(&self) -> i64 {
        self.creator
    }

    fn branch_exists(&self, ref_name: &str) -> bool {
        self.branch_checks.fetch_add(1, Ordering::SeqCst);
        self.branches.contains(ref_name)
    }

    fn resolve_user_id(&self, external_id: i64) -> Option<i64> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        self.users.get(&external_id).copied()
    }

    fn find_milestone(&self, number: i64) -> Option<MilestoneRef> {
        self.milestones.iter().find(|m| m.iid == number).cloned()
    }
}
