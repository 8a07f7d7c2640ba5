use super::{response::Response, Error, Headers};
use crate::config::Token;
use reqwest::RequestBuilder;

#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    api_url: String,
    token: Token,
}

impl Client {
    pub fn new(api_url: impl Into<String>, token: Token) -> Client {
        Client {
            inner: reqwest::Client::new(),
            api_url: api_url.into(),
            token,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("GET {}", url);
        self.inner.get(url).default_headers(&self.token)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("POST {}", url);
        self.inner.post(url).default_headers(&self.token)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        self.inner.put(url).default_headers(&self.token)
    }

    /// Sends the request and buffers the whole body, whatever the status.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let response = builder.send().await?;
        Response::read(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}
