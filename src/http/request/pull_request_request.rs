use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body,
        }
    }
}
