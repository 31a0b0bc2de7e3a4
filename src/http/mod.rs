use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::{Deref, DerefMut};

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "imgship")
    }
}
