use crate::http::{
    response::{mentions_no_commits, ErrorResponse, PullRequest, Response},
    Error,
};
use reqwest::StatusCode;

/// What a single "create pull request" call told us.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(PullRequest),
    AlreadyUpToDate,
    /// 422 for any other reason, usually an open pull request for the same branches.
    Conflict(String),
}

impl CreateOutcome {
    pub fn classify(response: Response) -> Result<CreateOutcome, Error> {
        if response.is_success() {
            return Ok(CreateOutcome::Created(response.json()?));
        }

        if response.status != StatusCode::UNPROCESSABLE_ENTITY.as_u16() {
            return Err(Error::Status {
                status: response.status,
                body: response.body,
            });
        }

        if mentions_no_commits(&response.body) {
            return Ok(CreateOutcome::AlreadyUpToDate);
        }

        let message = serde_json::from_str::<ErrorResponse>(&response.body)
            .map(|error| error.summary())
            .unwrap_or(response.body);

        Ok(CreateOutcome::Conflict(message))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PullRequestOutcome {
    Created(PullRequest),
    AlreadyUpToDate,
    ExistingPullRequest(PullRequest),
    Inconsistent { head: String, base: String },
}

impl PullRequestOutcome {
    /// Resolves a conflict against the currently open pull requests.
    pub fn from_open(open: Vec<PullRequest>, head: &str, base: &str) -> PullRequestOutcome {
        match open
            .into_iter()
            .find(|pr| pr.is_open() && pr.is_between(head, base))
        {
            Some(pr) => PullRequestOutcome::ExistingPullRequest(pr),
            None => PullRequestOutcome::Inconsistent {
                head: head.to_owned(),
                base: base.to_owned(),
            },
        }
    }

    pub fn into_pull_request(self) -> Result<Option<PullRequest>, Error> {
        match self {
            PullRequestOutcome::Created(pr) | PullRequestOutcome::ExistingPullRequest(pr) => {
                Ok(Some(pr))
            }
            PullRequestOutcome::AlreadyUpToDate => Ok(None),
            PullRequestOutcome::Inconsistent { head, base } => {
                Err(Error::Inconsistent { head, base })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            body: body.to_string(),
        }
    }

    fn pr(number: u64, head: &str, base: &str, state: &str) -> PullRequest {
        serde_json::from_value(serde_json::json!({
            "number": number,
            "state": state,
            "head": {"ref": head},
            "base": {"ref": base},
        }))
        .unwrap()
    }

    #[test]
    fn should_classify_created() {
        let outcome = CreateOutcome::classify(response(201, r#"{"number": 42}"#)).unwrap();

        assert!(matches!(outcome, CreateOutcome::Created(pr) if pr.number == 42));
    }

    #[test]
    fn should_classify_no_commits() {
        let outcome = CreateOutcome::classify(response(
            422,
            r#"{"errors":[{"message":"No commits between main and dev"}]}"#,
        ))
        .unwrap();

        assert!(matches!(outcome, CreateOutcome::AlreadyUpToDate));
    }

    #[test]
    fn should_classify_conflict() {
        let outcome = CreateOutcome::classify(response(
            422,
            r#"{"message":"Validation Failed","errors":[{"message":"A pull request already exists for dev"}]}"#,
        ))
        .unwrap();

        match outcome {
            CreateOutcome::Conflict(message) => {
                assert_eq!(message, "A pull request already exists for dev")
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn should_keep_raw_conflict_text() {
        let outcome = CreateOutcome::classify(response(422, "Unprocessable")).unwrap();

        assert!(matches!(outcome, CreateOutcome::Conflict(message) if message == "Unprocessable"));
    }

    #[test]
    fn should_fail_on_other_status() {
        let err = CreateOutcome::classify(response(403, "Forbidden")).unwrap_err();

        assert!(matches!(err, Error::Status { status: 403, ref body } if body == "Forbidden"));
    }

    #[test]
    fn should_reuse_matching_open_pull_request() {
        let open = vec![pr(1, "feature", "main", "open"), pr(2, "dev", "main", "open")];

        assert_eq!(
            PullRequestOutcome::from_open(open, "dev", "main"),
            PullRequestOutcome::ExistingPullRequest(pr(2, "dev", "main", "open"))
        );
    }

    #[test]
    fn should_be_inconsistent_without_match() {
        let open = vec![pr(1, "dev", "release", "open"), pr(2, "dev", "main", "closed")];

        let outcome = PullRequestOutcome::from_open(open, "dev", "main");

        assert!(matches!(
            outcome.into_pull_request(),
            Err(Error::Inconsistent { ref head, ref base }) if head == "dev" && base == "main"
        ));
    }

    #[test]
    fn should_map_up_to_date_to_none() {
        assert_eq!(
            PullRequestOutcome::AlreadyUpToDate.into_pull_request().unwrap(),
            None
        );
    }
}
