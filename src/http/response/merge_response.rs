use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MergeResponse {
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub message: String,
    pub sha: Option<String>,
}
