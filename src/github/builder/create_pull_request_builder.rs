use super::BuilderExecutor;
use crate::{
    github::{
        github_client::GithubClient,
        handler::pull_request_handler::PullRequestHandler,
        outcome::{CreateOutcome, PullRequestOutcome},
    },
    http::{request::PullRequestRequest, response::PullRequest, Error},
};
use anyhow::Result;

pub struct CreatePullRequestBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: Option<String>,
    pub base: String,
    pub head: String,
}

impl<'a> CreatePullRequestBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        CreatePullRequestBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            title: String::new(),
            body: None,
            base: String::new(),
            head: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.head.trim().is_empty() {
            return Err(Error::Validation { field: "head" });
        }
        if self.base.trim().is_empty() {
            return Err(Error::Validation { field: "base" });
        }

        Ok(())
    }

    /// Creates the pull request, or finds the open one GitHub refused to duplicate.
    pub async fn outcome(self) -> Result<PullRequestOutcome> {
        self.validate()?;

        let title = if self.title.is_empty() {
            format!("Merge {} into {}", self.head, self.base)
        } else {
            self.title
        };
        let request = PullRequestRequest::new(title, &self.head, &self.base, self.body);

        let response = self
            .client
            .create_pull_request(&self.owner, &self.repo, &request)
            .await?;

        let outcome = match CreateOutcome::classify(response)? {
            CreateOutcome::Created(pr) => {
                log::info!("Created pull request #{}", pr.number);
                PullRequestOutcome::Created(pr)
            }
            CreateOutcome::AlreadyUpToDate => {
                log::info!("No commits between {} and {}", self.base, self.head);
                PullRequestOutcome::AlreadyUpToDate
            }
            CreateOutcome::Conflict(message) => {
                log::info!("Pull request was not created: {}", message);
                let open = PullRequestHandler::new(self.client, &self.owner, &self.repo)
                    .list()
                    .await?;
                let outcome = PullRequestOutcome::from_open(open, &self.head, &self.base);
                if let PullRequestOutcome::ExistingPullRequest(pr) = &outcome {
                    log::info!("Reusing open pull request #{}", pr.number);
                }
                outcome
            }
        };

        Ok(outcome)
    }
}

impl BuilderExecutor for CreatePullRequestBuilder<'_> {
    type Output = Option<PullRequest>;

    async fn execute(self) -> Result<Self::Output> {
        Ok(self.outcome().await?.into_pull_request()?)
    }
}
