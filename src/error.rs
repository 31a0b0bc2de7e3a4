use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),
    #[error("failed to reach the content api")]
    Transport(#[source] reqwest::Error),
    #[error("remote rejected the write with status {status}: {body}")]
    RemoteWrite { status: u16, body: String },
    #[error("upload response did not contain a download url")]
    MalformedResponse {
        #[source]
        cause: serde_json::Error,
    },
}
