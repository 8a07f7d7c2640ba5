use serde::Deserialize;

const NO_COMMITS_BETWEEN: &str = "no commits between";

/// Error payload GitHub attaches to 4xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Object {
        #[serde(default)]
        message: Option<String>,
    },
    Text(String),
}

impl ErrorDetail {
    fn message(&self) -> Option<&str> {
        match self {
            ErrorDetail::Object { message } => message.as_deref(),
            ErrorDetail::Text(text) => Some(text.as_str()),
        }
    }
}

impl ErrorResponse {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.message.as_str())
            .chain(self.errors.iter().filter_map(ErrorDetail::message))
            .filter(|message| !message.is_empty())
    }

    /// Text shown to the user, detail messages first.
    pub fn summary(&self) -> String {
        let mut messages: Vec<&str> = self
            .errors
            .iter()
            .filter_map(ErrorDetail::message)
            .collect();
        if messages.is_empty() {
            messages.push(&self.message);
        }
        messages.join("; ")
    }
}

/// Whether a 422 body says the branches have nothing to merge. Falls back to
/// the raw text when the body is not the usual JSON error payload.
pub fn mentions_no_commits(body: &str) -> bool {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error
            .messages()
            .any(|message| message.to_lowercase().contains(NO_COMMITS_BETWEEN)),
        Err(_) => body.to_lowercase().contains(NO_COMMITS_BETWEEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_no_commits_in_details() {
        let body = r#"{"message":"Validation Failed","errors":[{"resource":"PullRequest","code":"custom","message":"No commits between main and dev"}]}"#;

        assert!(mentions_no_commits(body));
    }

    #[test]
    fn should_match_case_insensitively() {
        assert!(mentions_no_commits(
            r#"{"errors":[{"message":"NO COMMITS BETWEEN main AND dev"}]}"#
        ));
        assert!(mentions_no_commits(r#"{"message":"no commits between a and b"}"#));
    }

    #[test]
    fn should_fall_back_to_raw_text() {
        assert!(mentions_no_commits("No commits between main and dev"));
        assert!(!mentions_no_commits("<html>Unprocessable</html>"));
    }

    #[test]
    fn should_not_match_existing_pull_request() {
        let body = r#"{"message":"Validation Failed","errors":[{"message":"A pull request already exists for legendu-net:dev."}]}"#;

        assert!(!mentions_no_commits(body));
    }

    #[test]
    fn should_summarize_details_first() {
        let error: ErrorResponse = serde_json::from_str(
            r#"{"message":"Validation Failed","errors":[{"message":"A pull request already exists"},"plain"]}"#,
        )
        .unwrap();

        assert_eq!(error.summary(), "A pull request already exists; plain");
    }

    #[test]
    fn should_summarize_top_level_message() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"message":"Validation Failed","errors":[{"code":"invalid"}]}"#)
                .unwrap();

        assert_eq!(error.summary(), "Validation Failed");
    }
}
