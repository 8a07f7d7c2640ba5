use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub title: String,
    pub html_url: Option<String>,
    #[serde(default)]
    pub head: BranchRef,
    #[serde(default)]
    pub base: BranchRef,
}

impl PullRequest {
    pub fn is_between(&self, head: &str, base: &str) -> bool {
        self.head.name == head && self.base.name == base
    }

    pub fn is_open(&self) -> bool {
        self.state.eq_ignore_ascii_case("open")
    }
}
