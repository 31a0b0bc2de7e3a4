mod upsert_image_request;

pub use upsert_image_request::UpsertImageRequest;
