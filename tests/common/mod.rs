use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use jsonwebtoken::{encode, DecodingKey, EncodingKey, Header};
use parcel_dashboard::{
    api, config,
    directory::HttpDirectory,
    http::{self, AppState, AuthClaims},
};
use reqwest::{header::LOCATION, redirect, StatusCode};
use serde_json::Value;
use time::OffsetDateTime;
use tokio::net::TcpListener;

const JWT_SECRET: &str = "test-secret";

/// How the fake directory answers `GET /user/{email}`.
#[derive(Clone)]
pub enum Answer {
    Record(Value),
    Status(StatusCode),
    Delayed(Duration, Value),
}

struct FakeDirectory {
    answers: HashMap<String, Answer>,
    calls: AtomicUsize,
}

async fn lookup(
    State(directory): State<Arc<FakeDirectory>>,
    Path(email): Path<String>,
) -> Response {
    directory.calls.fetch_add(1, Ordering::SeqCst);
    match directory.answers.get(&email).cloned() {
        Some(Answer::Record(record)) => Json(record).into_response(),
        Some(Answer::Status(status)) => status.into_response(),
        Some(Answer::Delayed(delay, record)) => {
            tokio::time::sleep(delay).await;
            Json(record).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind a listener");
    let addr = listener.local_addr().expect("no local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    format!("http://{addr}")
}

pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    directory: Arc<FakeDirectory>,
}

impl Client {
    /// Spawns the dashboard in front of a fake directory holding `answers`.
    pub async fn spawn(
        answers: impl IntoIterator<Item = (&'static str, Answer)>,
    ) -> Self {
        Self::spawn_with_timeout(answers, Duration::from_secs(5)).await
    }

    pub async fn spawn_with_timeout(
        answers: impl IntoIterator<Item = (&'static str, Answer)>,
        lookup_timeout: Duration,
    ) -> Self {
        let directory = Arc::new(FakeDirectory {
            answers: answers
                .into_iter()
                .map(|(email, answer)| (email.to_string(), answer))
                .collect(),
            calls: AtomicUsize::new(0),
        });
        let directory_url = serve(
            Router::new()
                .route("/user/:email", get(lookup))
                .with_state(Arc::clone(&directory)),
        )
        .await;
        Self::spawn_dashboard(directory_url, lookup_timeout, directory).await
    }

    /// Spawns the dashboard pointed at a port nobody listens on.
    pub async fn spawn_with_unreachable_directory() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind a listener");
        let addr = listener.local_addr().expect("no local address");
        drop(listener);

        let directory = Arc::new(FakeDirectory {
            answers: HashMap::new(),
            calls: AtomicUsize::new(0),
        });
        Self::spawn_dashboard(
            format!("http://{addr}"),
            Duration::from_secs(5),
            directory,
        )
        .await
    }

    async fn spawn_dashboard(
        directory_url: String,
        lookup_timeout: Duration,
        directory: Arc<FakeDirectory>,
    ) -> Self {
        let app = http::router(AppState {
            directory: HttpDirectory::new(&config::Directory {
                url: directory_url,
                timeout: lookup_timeout,
            })
            .expect("invalid directory url"),
            lookup_timeout,
            jwt_decoding_key: DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        });

        Self {
            inner: reqwest::Client::builder()
                .redirect(redirect::Policy::none())
                .build()
                .expect("failed to build a client"),
            base_url: serve(app).await,
            directory,
        }
    }

    pub fn directory_calls(&self) -> usize {
        self.directory.calls.load(Ordering::SeqCst)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut req = self.inner.get(format!("{}{path}", self.base_url));
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req.send().await.expect("failed to send a request")
    }

    /// Requests `path` as `email` and returns where the dashboard sent us.
    pub async fn redirect(
        &self,
        path: &str,
        email: Option<&str>,
    ) -> Result<String, StatusCode> {
        let token = email.map(token);
        let res = self.get(path, token.as_deref()).await;
        if res.status() != StatusCode::SEE_OTHER {
            return Err(res.status());
        }
        Ok(res
            .headers()
            .get(LOCATION)
            .expect("no location header")
            .to_str()
            .expect("invalid location header")
            .to_string())
    }

    pub async fn layout(
        &self,
        path: &str,
        email: &str,
    ) -> Result<api::Layout, StatusCode> {
        let token = token(email);
        Ok(self
            .get(path, Some(&token))
            .await
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))?
            .json::<api::Layout>()
            .await
            .expect("failed to get a response"))
    }
}

pub fn token(email: &str) -> String {
    token_expiring_at(email, OffsetDateTime::now_utc() + time::Duration::HOUR)
}

pub fn token_expiring_at(email: &str, exp: OffsetDateTime) -> String {
    encode(
        &Header::default(),
        &AuthClaims {
            email: api::Email::from(email),
            exp: exp.unix_timestamp(),
        },
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode a token")
}

pub fn record(user_type: &str) -> Answer {
    Answer::Record(serde_json::json!({ "userType": user_type }))
}
