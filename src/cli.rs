use clap::{builder::NonEmptyStringValueParser, Parser, Subcommand};

/// Open a pull request from `dev` and, on request, merge it.
#[derive(Parser)]
#[command(name = "pr-merger", version)]
pub struct Cli {
    /// The personal access token for authentication.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub token: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Open a pull request from `dev` into TARGET and merge it right away.
    UpdateBranch {
        /// Branch to merge `dev` into.
        target: String,
    },
}
