use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpsertImageRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UpsertImageRequest {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        branch: impl Into<String>,
        sha: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            branch: branch.into(),
            sha,
        }
    }
}
