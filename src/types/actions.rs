//! Workflow run data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: Option<String>,
    pub head_branch: String,
    /// "queued", "in_progress" or "completed"
    pub status: String,
    /// Populated only once the run reaches a terminal status
    pub conclusion: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Envelope returned by the workflow runs listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRunsPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_workflow_has_no_conclusion() {
        let json = r#"{
            "id": 99,
            "name": "ci",
            "head_branch": "main",
            "status": "in_progress",
            "conclusion": null,
            "html_url": "https://github.com/acme/octogate/actions/runs/99",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-01T12:01:00Z"
        }"#;

        let run: WorkflowRun = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(run.status, "in_progress");
        assert!(run.conclusion.is_none());
    }

    #[test]
    fn empty_page_defaults_to_no_runs() {
        let page: WorkflowRunsPage = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(page.total_count, 0);
        assert!(page.workflow_runs.is_empty());
    }
}
