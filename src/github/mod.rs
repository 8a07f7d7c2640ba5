pub mod builder;
pub mod github_client;
mod handler;
pub mod outcome;

use self::{builder::BuilderExecutor, github_client::GithubClient};
use crate::{
    config::{Config, MAIN_BRANCH_NAME, PULL_REQUEST_BODY},
    http::response::PullRequest,
};
use anyhow::{Context, Result};

/// Opens a pull request from the source branch into `main`. Never merges.
pub async fn simple_merge(config: &Config) -> Result<Option<PullRequest>> {
    let client = GithubClient::new(config);

    open_pull_request(&client, config, MAIN_BRANCH_NAME).await
}

/// Opens (or reuses) a pull request from the source branch into `target`
/// and merges it. Nothing happens when the branches are already even.
pub async fn update_branch(config: &Config, target: &str) -> Result<Option<PullRequest>> {
    let client = GithubClient::new(config);

    let pr = open_pull_request(&client, config, target).await?;

    match &pr {
        Some(pr) => {
            log::info!("Merging pull request #{} into {}", pr.number, target);
            client
                .repo(&config.repository.owner, &config.repository.name)
                .pull_requests()
                .merge(pr.number)
                .await
                .with_context(|| format!("Cannot merge pull request #{}", pr.number))?;
        }
        None => log::info!("{} is up to date with {}", target, config.source_branch),
    }

    Ok(pr)
}

async fn open_pull_request(
    client: &GithubClient,
    config: &Config,
    base: &str,
) -> Result<Option<PullRequest>> {
    log::info!(
        "Opening pull request {} -> {} on {}",
        config.source_branch,
        base,
        config.repository
    );

    let pr = client
        .repo(&config.repository.owner, &config.repository.name)
        .pull_requests()
        .create()
        .head(&config.source_branch)
        .base(base)
        .title(config.pull_request_title(base))
        .body(PULL_REQUEST_BODY)
        .execute()
        .await
        .with_context(|| format!("Cannot create pull request into {}", base))?;

    if let Some(pr) = &pr {
        log::info!(
            "Pull request #{} \"{}\" {}",
            pr.number,
            pr.title,
            pr.html_url.as_deref().unwrap_or_default()
        );
    }

    Ok(pr)
}
