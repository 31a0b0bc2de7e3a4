mod builder;
pub mod github_client;
mod request;
mod response;

pub use builder::{BuilderExecutor, UploadBuilder};
pub use github_client::GithubClient;
