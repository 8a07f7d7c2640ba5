mod cli;
mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{Config, Repository, Token, GITHUB_API_URL, OWNER, REPOSITORY};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init()?;

    let config = Config::new(
        Token::new(cli.token),
        Repository::new(OWNER, REPOSITORY),
        GITHUB_API_URL,
    );

    match cli.command {
        None => {
            github::simple_merge(&config)
                .await
                .context("Cannot open the pull request")?;
        }
        Some(Command::UpdateBranch { target }) => {
            github::update_branch(&config, &target)
                .await
                .with_context(|| format!("Cannot update branch {}", target))?;
        }
    }

    log::info!("Done");

    Ok(())
}
