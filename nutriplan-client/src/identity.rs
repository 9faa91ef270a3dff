use async_trait::async_trait;
use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::client::status_error;

pub const AUTH_DISABLED_MESSAGE: &str = "Authentication is currently disabled.";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("{}", AUTH_DISABLED_MESSAGE)]
    Disabled,
    #[error("identity provider unreachable")]
    CommunicationError,
    #[error("identity provider rejected the request")]
    RequestError,
    #[error("identity provider failed")]
    InternalServerError,
    #[error("incorrect identity provider response")]
    ResponseError,
}

impl From<crate::client::Error> for IdentityError {
    fn from(e: crate::client::Error) -> Self {
        match e {
            crate::client::Error::CommunicationError => IdentityError::CommunicationError,
            crate::client::Error::InternalServerError => IdentityError::InternalServerError,
            crate::client::Error::RequestError => IdentityError::RequestError,
            crate::client::Error::ResponseError => IdentityError::ResponseError,
        }
    }
}

type Result<T> = std::result::Result<T, IdentityError>;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Source of the signed-in user, if there is one.
#[mockall::automock]
#[async_trait]
pub trait Identity: Send + Sync {
    async fn current_user(&self) -> Result<Option<User>>;
    async fn sign_out(&self) -> Result<()>;
}

/// Reports the same fixed user every time; signing out is not supported.
pub struct StubIdentity {
    user: User,
}

impl StubIdentity {
    pub fn new() -> Self {
        Self {
            user: User {
                id: "local-user".to_owned(),
                email: "user@example.com".to_owned(),
            },
        }
    }
}

impl Default for StubIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Identity for StubIdentity {
    async fn current_user(&self) -> Result<Option<User>> {
        Ok(Some(self.user.clone()))
    }

    async fn sign_out(&self) -> Result<()> {
        info!("Sign out requested while authentication is disabled");
        Err(IdentityError::Disabled)
    }
}

/// Identity provider reached over HTTP with a bearer token.
pub struct RemoteIdentity {
    url: String,
    token: String,
    client: reqwest::Client,
}

impl RemoteIdentity {
    fn new(url: String, token: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            token,
            client: reqwest::Client::new(),
        }
    }
}

pub fn create_identity(url: String, token: String) -> impl Identity {
    RemoteIdentity::new(url, token)
}

#[async_trait]
impl Identity for RemoteIdentity {
    async fn current_user(&self) -> Result<Option<User>> {
        debug!("Fetching current user from {}", self.url);
        let resp = self
            .client
            .get(format!("{}/auth/v1/user", self.url))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|_| IdentityError::CommunicationError)?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if let Some(e) = status_error(resp.status()) {
            return Err(e.into());
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|_| IdentityError::ResponseError)
    }

    async fn sign_out(&self) -> Result<()> {
        let resp = self
            .client
            .post(format!("{}/auth/v1/logout", self.url))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|_| IdentityError::CommunicationError)?;

        match status_error(resp.status()) {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
