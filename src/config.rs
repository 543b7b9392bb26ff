use std::{net, time};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub http: Http,
    pub jwt: Jwt,
    pub directory: Directory,
}

#[derive(Deserialize)]
pub struct Http {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Deserialize)]
pub struct Server {
    pub addr: net::SocketAddr,
}

#[derive(Deserialize)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize)]
pub struct Jwt {
    pub secret: String,
}

#[derive(Deserialize)]
pub struct Directory {
    pub url: String,
    /// Upper bound on a single role lookup. Expiry counts as a failed lookup.
    #[serde(with = "humantime_serde", default = "Directory::default_timeout")]
    pub timeout: time::Duration,
}

impl Directory {
    pub const DEFAULT_TIMEOUT: time::Duration = time::Duration::from_secs(5);

    fn default_timeout() -> time::Duration {
        Self::DEFAULT_TIMEOUT
    }
}
