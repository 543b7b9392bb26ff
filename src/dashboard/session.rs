use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::{
    auth::Observer,
    dashboard::{resolve, Resolution},
    directory::Directory,
};

/// Keeps a [`Resolution`] in sync with a changing auth state.
///
/// Every change of the auth state restarts resolution. A lookup that is
/// still in flight when the state changes is dropped, so its result can
/// never overwrite the resolution of the newer identity.
pub struct Session<D> {
    auth: Observer,
    directory: D,
    timeout: Duration,
    resolution: watch::Sender<Resolution>,
}

impl<D: Directory> Session<D> {
    pub fn new(
        auth: Observer,
        directory: D,
        timeout: Duration,
    ) -> (Self, watch::Receiver<Resolution>) {
        let (resolution, rx) = watch::channel(Resolution::Resolving);
        let session = Self {
            auth,
            directory,
            timeout,
            resolution,
        };
        (session, rx)
    }

    /// Runs until the auth provider is dropped.
    pub async fn run(mut self) {
        loop {
            let captured = self.auth.current();
            self.resolution.send_replace(Resolution::Resolving);

            tokio::select! {
                biased;

                alive = self.auth.changed() => {
                    if !alive {
                        return;
                    }
                    debug!("auth state changed mid-lookup, restarting");
                }
                resolution = resolve(&captured, &self.directory, self.timeout) => {
                    if self.auth.is_stale() {
                        debug!("discarding role resolved for a stale identity");
                        continue;
                    }
                    self.resolution.send_replace(resolution);
                    if !self.auth.changed().await {
                        return;
                    }
                }
            }
        }
    }
}
