//! Uploads in-memory images to a GitHub repository through the contents API
//! and hands back the public download URL of the committed file.

mod config;
mod error;
mod github;
mod http;
pub mod logger;

pub use config::UploaderConfig;
pub use error::{Error, Result};
pub use github::{BuilderExecutor, GithubClient, UploadBuilder};

/// Uploads `payload` to `destination_path` in the configured repository,
/// resolving credentials and target from the process environment.
///
/// Existing files are overwritten; the probe for the current revision is
/// best-effort, so a transient failure there degrades to a plain create.
pub async fn upload(payload: &[u8], destination_path: &str) -> Result<String> {
    let config = UploaderConfig::from_env()?;

    GithubClient::new(config)
        .upload(payload)
        .path(destination_path)
        .execute()
        .await
}
