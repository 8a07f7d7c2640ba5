use super::handler::repository_handler::RepositoryHandler;
use crate::{
    config::Config,
    http::{
        request::PullRequestRequest,
        response::{MergeResponse, PullRequest, Response},
        Client,
    },
};
use anyhow::Result;
use serde_json::json;

pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    pub fn new(config: &Config) -> Self {
        GithubClient {
            http: Client::new(&config.api_url, config.token.clone()),
        }
    }

    pub fn repo(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    /// Returns the raw response: a 422 here is an answer, not a failure.
    pub(super) async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &PullRequestRequest,
    ) -> Result<Response> {
        log::debug!("Creating pull request");
        let uri = format!("/repos/{}/{}/pulls", owner, repo);

        let response = self.http.send(self.http.post(&uri).json(request)).await?;

        Ok(response)
    }

    pub(super) async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>> {
        log::debug!("Listing open pull requests");
        let uri = format!("/repos/{}/{}/pulls", owner, repo);

        let response = self
            .http
            .send(self.http.get(&uri).query(&[("state", "open")]))
            .await?
            .error_for_status()?;

        Ok(response.json()?)
    }

    pub(super) async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<MergeResponse> {
        log::debug!("Merging pull request #{}", number);
        let uri = format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number);

        let response = self
            .http
            .send(self.http.put(&uri).json(&json!({})))
            .await?
            .error_for_status()?;

        Ok(response.json()?)
    }
}
