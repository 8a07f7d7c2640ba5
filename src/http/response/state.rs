use crate::http::Error;

use serde::de::DeserializeOwned;

/// A fully buffered API response.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub async fn read(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status().as_u16();
        let body = value.text().await?;

        Ok(Response { status, body })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str::<T>(&self.body)?)
    }
}
