use async_trait::async_trait;
use derive_more::{Display, From};
use reqwest::{StatusCode, Url};

use crate::{
    api::{
        user::{Record, UnknownRole},
        Email, Role,
    },
    config,
};

/// Remote user directory that knows the role of every registered email.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn role(&self, email: &Email) -> Result<Role, LookupError>;
}

#[derive(Debug, Display, From)]
pub enum LookupError {
    #[display("directory request failed: {_0}")]
    #[from]
    Request(reqwest::Error),
    #[display("directory answered {_0}")]
    Status(StatusCode),
    #[display("no role on record")]
    MissingRole,
    #[display("unrecognized role {_0:?}")]
    UnknownRole(String),
    #[display("directory lookup timed out")]
    TimedOut,
}

impl std::error::Error for LookupError {}

impl From<UnknownRole> for LookupError {
    fn from(UnknownRole(value): UnknownRole) -> Self {
        Self::UnknownRole(value)
    }
}

impl Record {
    pub fn role(&self) -> Result<Role, LookupError> {
        match self.user_type.as_deref() {
            None => Err(LookupError::MissingRole),
            Some(value) => Ok(value.parse()?),
        }
    }
}

#[derive(Debug, Display)]
#[display("invalid directory url: {_0}")]
pub struct InvalidUrl(String);

impl std::error::Error for InvalidUrl {}

/// [`Directory`] backed by `GET {url}/user/{email}`.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base: Url,
}

impl HttpDirectory {
    pub fn new(config: &config::Directory) -> Result<Self, InvalidUrl> {
        let base = Url::parse(&config.url)
            .map_err(|e| InvalidUrl(format!("{}: {e}", config.url)))?;
        if base.cannot_be_a_base() {
            return Err(InvalidUrl(config.url.clone()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn user_url(&self, email: &Email) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("user").push(email.as_str());
        }
        url
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn role(&self, email: &Email) -> Result<Role, LookupError> {
        let response = self.client.get(self.user_url(email)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        response.json::<Record>().await?.role()
    }
}
