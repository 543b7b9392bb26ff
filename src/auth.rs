//! Authentication state as an injected, observable capability.
//!
//! [`Provider`] is held by whatever signs users in and out, [`Observer`]s
//! are handed to the components that need to react to it.

use tokio::sync::watch;

use crate::api::Email;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    pub email: Email,
}

impl Identity {
    pub fn new(email: impl Into<Email>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum AuthState {
    /// The provider has not settled yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn(Identity),
}

impl From<Option<Identity>> for AuthState {
    fn from(identity: Option<Identity>) -> Self {
        identity.map_or(Self::SignedOut, Self::SignedIn)
    }
}

/// Creates a provider starting in [`AuthState::Loading`].
pub fn channel() -> (Provider, Observer) {
    let (tx, rx) = watch::channel(AuthState::Loading);
    (Provider(tx), Observer(rx))
}

#[derive(Debug)]
pub struct Provider(watch::Sender<AuthState>);

impl Provider {
    pub fn sign_in(&self, identity: Identity) {
        self.0.send_replace(AuthState::SignedIn(identity));
    }

    pub fn sign_out(&self) {
        self.0.send_replace(AuthState::SignedOut);
    }

    pub fn set(&self, state: AuthState) {
        self.0.send_replace(state);
    }
}

#[derive(Clone, Debug)]
pub struct Observer(watch::Receiver<AuthState>);

impl Observer {
    /// Returns the current state and marks it as seen.
    pub fn current(&mut self) -> AuthState {
        self.0.borrow_and_update().clone()
    }

    /// Whether the state changed since the last [`Observer::current`].
    ///
    /// A dropped provider counts as a change, so callers re-check and
    /// then observe the closed channel through [`Observer::changed`].
    pub fn is_stale(&self) -> bool {
        self.0.has_changed().unwrap_or(true)
    }

    /// Waits for the next change. Returns `false` once the provider is gone.
    pub async fn changed(&mut self) -> bool {
        self.0.changed().await.is_ok()
    }
}
