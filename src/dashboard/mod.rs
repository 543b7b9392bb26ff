//! Role resolution and routing for the protected dashboard area.
//!
//! [`resolve`] turns the auth state into a [`Resolution`] by asking the
//! user directory for a role, [`screen`] turns a resolution and the
//! current path into what should be shown or where to go instead.

pub mod session;

use std::time::Duration;

use tokio::time;
use tracing::{debug, warn};

use crate::{
    api::{
        dashboard::{DASHBOARD, HOME, SIGN_IN},
        Layout, Role, View,
    },
    auth::AuthState,
    directory::{Directory, LookupError},
};

pub use self::session::Session;

#[derive(Debug)]
pub enum Resolution {
    /// Auth has not settled or the role lookup is in flight.
    Resolving,
    Unauthenticated,
    RoleLookupFailed(LookupError),
    Ready(Role),
}

impl Resolution {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Ready(role) => Some(*role),
            Self::Resolving
            | Self::Unauthenticated
            | Self::RoleLookupFailed(_) => None,
        }
    }
}

/// Resolves `auth` into a terminal [`Resolution`], or
/// [`Resolution::Resolving`] while auth is still loading.
///
/// The directory is only consulted for a signed-in identity, and the
/// lookup is cut off after `timeout`.
pub async fn resolve<D>(
    auth: &AuthState,
    directory: &D,
    timeout: Duration,
) -> Resolution
where
    D: Directory + ?Sized,
{
    let identity = match auth {
        AuthState::Loading => return Resolution::Resolving,
        AuthState::SignedOut => return Resolution::Unauthenticated,
        AuthState::SignedIn(identity) => identity,
    };

    let lookup = time::timeout(timeout, directory.role(&identity.email))
        .await
        .unwrap_or(Err(LookupError::TimedOut));
    match lookup {
        Ok(role) => {
            debug!(email = %identity.email, %role, "resolved dashboard role");
            Resolution::Ready(role)
        }
        Err(e) => {
            warn!(email = %identity.email, "role lookup failed: {e}");
            Resolution::RoleLookupFailed(e)
        }
    }
}

/// Outcome of routing a path under the dashboard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Screen {
    Loading,
    Redirect(&'static str),
    Render(Layout),
    NotFound,
}

pub fn screen(resolution: &Resolution, path: &str) -> Screen {
    let role = match resolution {
        Resolution::Resolving => return Screen::Loading,
        Resolution::Unauthenticated => return Screen::Redirect(SIGN_IN),
        Resolution::RoleLookupFailed(_) => return Screen::Redirect(HOME),
        Resolution::Ready(role) => *role,
    };

    if is_root(path) {
        let landing = role.landing().path();
        debug!(%role, to = landing, "redirecting to landing view");
        return Screen::Redirect(landing);
    }

    match View::from_path(path) {
        Some(view) => Screen::Render(Layout::new(role, view)),
        None => Screen::NotFound,
    }
}

fn is_root(path: &str) -> bool {
    path.strip_suffix('/').unwrap_or(path) == DASHBOARD
}
