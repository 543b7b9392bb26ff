use std::error::Error;

use axum::http::{header::AUTHORIZATION, HeaderValue, Method};
use jsonwebtoken::DecodingKey;
use tokio::{fs, net};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use parcel_dashboard::{
    directory::HttpDirectory,
    http::{self, AppState},
    Config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fs::read_to_string("config.toml").await?;
    let config = toml::from_str::<Config>(&config)?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([AUTHORIZATION]);
    for origin in &config.http.cors.allowed_origins {
        cors = cors.allow_origin(origin.parse::<HeaderValue>()?);
    }

    let app = http::router(AppState {
        directory: HttpDirectory::new(&config.directory)?,
        lookup_timeout: config.directory.timeout,
        jwt_decoding_key: DecodingKey::from_secret(
            config.jwt.secret.as_bytes(),
        ),
    })
    .layer(cors);

    let listener = net::TcpListener::bind(config.http.server.addr).await?;
    tracing::info!(addr = %config.http.server.addr, "serving dashboard");
    axum::serve(listener, app).await?;

    Ok(())
}
