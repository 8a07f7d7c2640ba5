mod error_response;
mod merge_response;
mod pull_request_response;
mod state;

pub use error_response::{mentions_no_commits, ErrorResponse};
pub use merge_response::MergeResponse;
pub use pull_request_response::PullRequest;
pub use state::Response;
