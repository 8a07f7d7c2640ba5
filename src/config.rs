use std::fmt;

pub const OWNER: &str = "legendu-net";
pub const REPOSITORY: &str = "docker-rust-cicd";
pub const SOURCE_BRANCH: &str = "dev";
pub const MAIN_BRANCH_NAME: &str = "main";
pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const PULL_REQUEST_BODY: &str = "Automated pull request opened by pr-merger.";

/// Personal access token. Never printed.
#[derive(Clone)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: Token,
    pub repository: Repository,
    pub source_branch: String,
    pub api_url: String,
}

impl Config {
    pub fn new(token: Token, repository: Repository, api_url: impl Into<String>) -> Config {
        Config {
            token,
            repository,
            source_branch: SOURCE_BRANCH.to_owned(),
            api_url: api_url.into(),
        }
    }

    pub fn pull_request_title(&self, base: &str) -> String {
        format!("Merge {} into {}", self.source_branch, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_leak_token_in_debug_output() {
        let config = Config::new(
            Token::new("ghp_secret"),
            Repository::new(OWNER, REPOSITORY),
            GITHUB_API_URL,
        );

        let printed = format!("{:?}", config);

        assert!(!printed.contains("ghp_secret"));
        assert!(printed.contains("Token(***)"));
    }

    #[test]
    fn should_build_default_title() {
        let config = Config::new(
            Token::new("token"),
            Repository::new(OWNER, REPOSITORY),
            GITHUB_API_URL,
        );

        assert_eq!(config.source_branch, "dev");
        assert_eq!(
            config.pull_request_title(MAIN_BRANCH_NAME),
            "Merge dev into main"
        );
        assert_eq!(config.pull_request_title("release"), "Merge dev into release");
    }

    #[test]
    fn should_display_repository() {
        assert_eq!(
            Repository::new(OWNER, REPOSITORY).to_string(),
            "legendu-net/docker-rust-cicd"
        );
    }
}
