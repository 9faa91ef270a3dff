use async_trait::async_trait;
use log::debug;
use nutriplan_model::profile::ProfileRecord;
use reqwest::StatusCode;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

/// Maps a response status onto the error it stands for, if any.
pub(crate) fn status_error(status: StatusCode) -> Option<Error> {
    if status.is_client_error() {
        Some(Error::RequestError)
    } else if status.is_server_error() {
        Some(Error::InternalServerError)
    } else {
        None
    }
}

/// Insert-only access to the remote profile store.
#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn insert_profile(&self, record: &ProfileRecord) -> Result<()>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: format!("{}/profiles", url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn insert_profile(&self, record: &ProfileRecord) -> Result<()> {
        debug!("Posting profile record to {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        match status_error(resp.status()) {
            Some(e) => Err(e),
            None if resp.status() == StatusCode::CREATED => Ok(()),
            None => Err(Error::ResponseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_errors() {
        let test_data = [
            (StatusCode::OK, None),
            (StatusCode::CREATED, None),
            (StatusCode::BAD_REQUEST, Some(Error::RequestError)),
            (StatusCode::UNAUTHORIZED, Some(Error::RequestError)),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(Error::InternalServerError),
            ),
            (StatusCode::BAD_GATEWAY, Some(Error::InternalServerError)),
        ];

        for (i, (status, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(status_error(status), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn profiles_endpoint_is_appended_once() {
        assert_eq!(
            ClientImpl::new("http://localhost:8080/".to_owned()).url,
            "http://localhost:8080/profiles"
        );
        assert_eq!(
            ClientImpl::new("http://localhost:8080".to_owned()).url,
            "http://localhost:8080/profiles"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_communication_error() {
        let client = create("http://127.0.0.1:9".to_owned());
        let record = ProfileRecord {
            user_id: "user".to_owned(),
            weight: 70.0,
            height: 170.0,
            age: 30,
            gender: nutriplan_model::profile::Gender::Male,
            activity_level: nutriplan_model::profile::ActivityLevel::Sedentary,
            goal: nutriplan_model::profile::Goal::Loss,
        };

        assert_eq!(
            client.insert_profile(&record).await,
            Err(Error::CommunicationError)
        );
    }
}
