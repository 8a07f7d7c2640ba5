pub mod client;
pub mod request;
pub mod response;

pub use client::Client;

use crate::config::Token;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};
use thiserror::Error;

pub trait Headers {
    fn default_headers(self, token: &Token) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &Token) -> RequestBuilder {
        self.bearer_auth(token.expose())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "pr-merger")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Pull request request is missing `{field}`")]
    Validation { field: &'static str },
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to send request")]
    Transport {
        #[from]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    Parse {
        #[from]
        cause: serde_json::Error,
    },
    #[error("GitHub rejected a pull request from `{head}` into `{base}` but no open one matches")]
    Inconsistent { head: String, base: String },
}
