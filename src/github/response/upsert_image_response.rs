use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpsertImageResponse {
    pub content: UploadedImage,
}

#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub download_url: String,
}
