use super::BuilderExecutor;
use crate::{github::github_client::GithubClient, Result};

pub struct UploadBuilder<'a> {
    client: &'a GithubClient,
    payload: Vec<u8>,
    path: String,
    message: Option<String>,
    branch: Option<String>,
}

impl<'a> UploadBuilder<'a> {
    pub(crate) fn new(client: &'a GithubClient, payload: impl Into<Vec<u8>>) -> Self {
        UploadBuilder {
            client,
            payload: payload.into(),
            path: String::new(),
            message: None,
            branch: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the generated commit message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Targets a branch other than the configured one.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

impl BuilderExecutor for UploadBuilder<'_> {
    type Output = String;

    async fn execute(self) -> Result<Self::Output> {
        self.client
            .upsert_image(
                &self.payload,
                &self.path,
                self.message.as_deref(),
                self.branch.as_deref(),
            )
            .await
    }
}
