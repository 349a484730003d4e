use chrono::{DateTime, Utc};
use common::text::author_line;
use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::branch::{resolve_branch, BranchSide};
use crate::context::TargetProjectContext;
use crate::identity::{resolve_assignee, resolve_milestone, resolve_or_default};
use crate::models::{Normalized, NormalizedMergeRequest};
use crate::payloads::RawPullRequest;
use crate::state::MergeRequestState;

/// A pull request spanning two distinct repositories cannot be represented
/// as a merge request within one project. An unknown repository on either
/// side counts as the same project.
pub fn is_valid(raw: &RawPullRequest) -> bool {
    match (&raw.head.repo, &raw.base.repo) {
        (Some(head), Some(base)) => head.id == base.id,
        _ => true,
    }
}

pub fn normalize<C>(raw: &RawPullRequest, ctx: &C) -> Normalized
where
    C: TargetProjectContext + ?Sized,
{
    let formatter = PullRequestFormatter::new(raw, ctx);
    let valid = formatter.is_valid();
    if !valid {
        debug!(
            number = raw.number,
            head_repo = ?raw.head.repo.as_ref().map(|r| r.id),
            base_repo = ?raw.base.repo.as_ref().map(|r| r.id),
            "cross-repository pull request rejected"
        );
    }
    Normalized {
        attributes: formatter.attributes(),
        valid,
    }
}

/// Call-scoped view over one raw pull request. Branch names and state are
/// computed on first access and reused, so each side's existence check runs
/// at most once per formatter.
pub struct PullRequestFormatter<'a, C: ?Sized> {
    raw: &'a RawPullRequest,
    ctx: &'a C,
    source_branch: OnceCell<String>,
    target_branch: OnceCell<String>,
    state: OnceCell<MergeRequestState>,
}

impl<'a, C> PullRequestFormatter<'a, C>
where
    C: TargetProjectContext + ?Sized,
{
    pub fn new(raw: &'a RawPullRequest, ctx: &'a C) -> Self {
        Self {
            raw,
            ctx,
            source_branch: OnceCell::new(),
            target_branch: OnceCell::new(),
            state: OnceCell::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid(self.raw)
    }

    pub fn number(&self) -> i64 {
        self.raw.number
    }

    pub fn source_sha(&self) -> Option<&str> {
        self.raw.head.sha.as_deref()
    }

    pub fn target_sha(&self) -> Option<&str> {
        self.raw.base.sha.as_deref()
    }

    pub fn source_branch_exists(&self) -> bool {
        self.ctx.branch_exists(&self.raw.head.ref_name)
    }

    pub fn target_branch_exists(&self) -> bool {
        self.ctx.branch_exists(&self.raw.base.ref_name)
    }

    pub fn source_branch(&self) -> &str {
        self.source_branch
            .get_or_init(|| resolve_branch(self.ctx, BranchSide::Source, &self.raw.head))
    }

    pub fn target_branch(&self) -> &str {
        self.target_branch
            .get_or_init(|| resolve_branch(self.ctx, BranchSide::Target, &self.raw.base))
    }

    pub fn state(&self) -> MergeRequestState {
        *self.state.get_or_init(|| MergeRequestState::derive(self.raw))
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.state().timestamp(self.raw)
    }

    pub fn description(&self) -> String {
        let mut description = author_line(&self.raw.author.login);
        description.push_str(self.raw.body.as_deref().unwrap_or(""));
        description
    }

    pub fn attributes(&self) -> NormalizedMergeRequest {
        let project = self.ctx.project();
        NormalizedMergeRequest {
            iid: self.number(),
            title: self.raw.title.clone().unwrap_or_default(),
            description: self.description(),
            source_project: project.clone(),
            source_branch: self.source_branch().to_string(),
            head_source_sha: self.source_sha().map(str::to_string),
            target_project: project,
            target_branch: self.target_branch().to_string(),
            base_target_sha: self.target_sha().map(str::to_string),
            state: self.state(),
            milestone: resolve_milestone(self.ctx, self.raw.milestone.as_ref()),
            author_id: resolve_or_default(self.ctx, self.raw.author.id),
            assignee_id: resolve_assignee(self.ctx, self.raw.assignee.as_ref()),
            created_at: self.raw.created_at,
            updated_at: self.updated_at(),
        }
    }
}
