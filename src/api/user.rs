use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Unique key of a signed-in user, as issued by the auth provider.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
pub enum Role {
    User,
    DeliveryMen,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::User, Self::DeliveryMen, Self::Admin];
}

#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("unrecognized role {_0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Self::User),
            "DeliveryMen" => Ok(Self::DeliveryMen),
            "Admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Body of `GET /user/{email}` on the user directory.
///
/// `userType` is kept as a raw string so that a record carrying an
/// unexpected value still decodes and can be rejected explicitly.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}
