//! Workflow runs resource client.

use std::sync::Arc;

use crate::clients::page_size;
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::{WorkflowRun, WorkflowRunsPage};

/// Client for workflow run queries.
pub struct ActionsClient {
    transport: Arc<dyn Transport>,
}

impl ActionsClient {
    /// Create a new actions client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List recent workflow runs of a repository.
    ///
    /// The endpoint wraps its items in an envelope; a missing envelope
    /// counts as zero runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the request
    /// fails.
    pub async fn list_runs(
        &self,
        owner: &str,
        repo: &str,
        limit: Option<u32>,
    ) -> Result<Vec<WorkflowRun>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/actions/runs"))
                    .query("per_page", page_size(limit)),
            )
            .await?;

        if value.is_null() {
            return Ok(Vec::new());
        }
        let page: WorkflowRunsPage = serde_json::from_value(value)?;
        Ok(page.workflow_runs)
    }
}
