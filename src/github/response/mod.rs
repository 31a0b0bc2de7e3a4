mod content_sha_response;
mod upsert_image_response;

pub use content_sha_response::ContentShaResponse;
pub use upsert_image_response::UpsertImageResponse;
