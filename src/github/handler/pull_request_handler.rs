use crate::{
    github::{
        builder::create_pull_request_builder::CreatePullRequestBuilder,
        github_client::GithubClient,
    },
    http::response::PullRequest,
};
use anyhow::Result;

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'a> {
        CreatePullRequestBuilder::new(self.client, &self.owner, &self.repo)
    }

    /// First page of open pull requests.
    pub async fn list(&self) -> Result<Vec<PullRequest>> {
        self.client
            .list_pull_requests(&self.owner, &self.repo)
            .await
    }

    pub async fn merge(&self, number: u64) -> Result<()> {
        let response = self
            .client
            .merge_pull_request(&self.owner, &self.repo, number)
            .await?;

        if response.merged {
            log::info!(
                "Merged pull request #{} ({})",
                number,
                response.sha.as_deref().unwrap_or("unknown sha")
            );
        } else {
            log::warn!("Pull request #{} not merged: {}", number, response.message);
        }

        Ok(())
    }
}
