//! Local stand-in for the remote listing endpoint.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use url::Url;

pub const TWO_LISTINGS: &str = r#"[
    {"id": 1, "name": "A", "location": "Seoul", "owner": {"email": "a@x.com"}},
    {"id": 2, "name": "B", "location": "Busan", "owner": {"email": "b@x.com"}}
]"#;

const MOCK_PATH: &str = "/accommodations/";

#[derive(Clone, Copy, Debug)]
pub enum MockResponse {
    Respond {
        status: StatusCode,
        body: &'static str,
    },
    /// Never answers.
    Hang,
}

impl MockResponse {
    pub fn ok(body: &'static str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode, body: &'static str) -> Self {
        Self::Respond { status, body }
    }
}

pub struct MockSource {
    pub url: Url,
    hits: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Wait until the endpoint has seen `count` requests.
    pub async fn wait_for_hits(&self, count: usize) {
        for _ in 0..500 {
            if self.hits() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("mock source saw {} requests, expected {}", self.hits(), count);
    }
}

pub async fn mock_source(response: MockResponse) -> MockSource {
    let hits = Arc::new(AtomicUsize::new(0));

    let handler = {
        let hits = hits.clone();
        move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                respond(response).await
            }
        }
    };

    let app = Router::new().route(MOCK_PATH, get(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind mock source");
    let addr = listener.local_addr().expect("mock source has no address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock source failed");
    });

    let url = format!("http://{}{}", addr, MOCK_PATH)
        .parse()
        .expect("invalid mock source url");

    MockSource { url, hits }
}

async fn respond(response: MockResponse) -> Response {
    match response {
        MockResponse::Respond { status, body } => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        MockResponse::Hang => std::future::pending().await,
    }
}

/// Url of a local port nobody listens on.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind probe port");
    let addr = listener.local_addr().expect("probe port has no address");
    drop(listener);

    format!("http://{}{}", addr, MOCK_PATH)
        .parse()
        .expect("invalid url")
}
