use crate::{Error, Result};
use std::env;

const GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_BRANCH_NAME: &str = "main";

const TOKEN_VAR: &str = "GITHUB_TOKEN";
const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const BRANCH_VAR: &str = "GITHUB_BRANCH";

/// Where uploads land and how they are authorized.
#[derive(Clone, Debug)]
pub struct UploaderConfig {
    pub token: String,
    pub repository: String,
    pub branch: String,
    pub api_base: String,
}

impl UploaderConfig {
    pub fn new(token: impl Into<String>, repository: impl Into<String>) -> Self {
        UploaderConfig {
            token: token.into(),
            repository: repository.into(),
            branch: DEFAULT_BRANCH_NAME.to_owned(),
            api_base: GITHUB_API_BASE.to_owned(),
        }
    }

    /// Resolves the upload target from the process environment.
    ///
    /// `GITHUB_TOKEN` and `GITHUB_REPOSITORY` (in "owner/name" form) are
    /// required; `GITHUB_BRANCH` falls back to "main" when unset.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_VAR).map_err(|_| Error::MissingConfig(TOKEN_VAR))?;
        let repository =
            env::var(REPOSITORY_VAR).map_err(|_| Error::MissingConfig(REPOSITORY_VAR))?;

        let mut config = UploaderConfig::new(token, repository);

        if let Ok(branch) = env::var(BRANCH_VAR) {
            config = config.branch(branch);
        }

        Ok(config)
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
