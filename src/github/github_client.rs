use super::{
    builder::UploadBuilder,
    request::UpsertImageRequest,
    response::{ContentShaResponse, UpsertImageResponse},
};
use crate::{
    config::UploaderConfig,
    http::{Headers, HttpClient},
    Error, Result,
};
use base64::{prelude::BASE64_STANDARD, Engine};

pub struct GithubClient {
    config: UploaderConfig,
    http: HttpClient,
}

impl GithubClient {
    pub fn new(config: UploaderConfig) -> Self {
        GithubClient {
            config,
            http: HttpClient::new(),
        }
    }

    pub fn upload(&self, payload: impl Into<Vec<u8>>) -> UploadBuilder<'_> {
        UploadBuilder::new(self, payload)
    }

    pub(super) async fn upsert_image(
        &self,
        payload: &[u8],
        path: &str,
        message: Option<&str>,
        branch: Option<&str>,
    ) -> Result<String> {
        let uri = format!(
            "{}/repos/{}/contents/{}",
            self.config.api_base, self.config.repository, path
        );

        let sha = self.existing_sha(&uri).await;

        if sha.is_some() {
            log::debug!("updating existing file at {}", path);
        } else {
            log::debug!("creating new file at {}", path);
        }

        let message = match message {
            Some(message) => message.to_owned(),
            None => format!("upload {}", path),
        };
        let branch = branch.unwrap_or(self.config.branch.as_str());

        let request =
            UpsertImageRequest::new(message, BASE64_STANDARD.encode(payload), branch, sha);

        let response = self
            .http
            .put(&uri)
            .github_headers(&self.config.token)
            .json(&request)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Transport)?;

        if !(200..300).contains(&status) {
            return Err(Error::RemoteWrite { status, body });
        }

        let uploaded = serde_json::from_str::<UpsertImageResponse>(&body)
            .map_err(|cause| Error::MalformedResponse { cause })?;

        Ok(uploaded.content.download_url)
    }

    /// Best-effort probe for the current revision of the file at `uri`.
    /// Any failure reads as "the file does not exist yet".
    async fn existing_sha(&self, uri: &str) -> Option<String> {
        let response = self
            .http
            .get(uri)
            .github_headers(&self.config.token)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let content = response.json::<ContentShaResponse>().await.ok()?;

        Some(content.sha)
    }
}
