use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContentShaResponse {
    pub sha: String,
}
