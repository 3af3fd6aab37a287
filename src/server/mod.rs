mod routes;
pub(crate) mod ui;

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::{feed::ListingFeed, source::ListingSource};

pub struct CtxBuilder {
    pub listings_url: Url,
}

impl CtxBuilder {
    pub fn new(listings_url: Url) -> Self {
        Self { listings_url }
    }

    pub fn build(self) -> Result<Ctx, anyhow::Error> {
        let source = ListingSource::new(self.listings_url)?;
        let feed = ListingFeed::new(source);

        Ok(Ctx { feed })
    }
}

/// Server context.
#[derive(Clone)]
pub struct Ctx {
    feed: ListingFeed,
}

impl Ctx {
    pub async fn run_server(self, port: u16) -> Result<(), anyhow::Error> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        run_server(addr, self).await
    }
}

pub const DEFAULT_PORT: u16 = 3333;

fn build_router(ctx: Ctx) -> Router {
    Router::new()
        .route("/", get(routes::homepage::handler_homepage))
        .route(
            routes::listings::PATH_LISTINGS,
            get(routes::listings::handler_listings),
        )
        .route(
            routes::account::PATH_LOGIN,
            get(routes::account::handler_login),
        )
        .route(
            routes::account::PATH_REGISTER,
            get(routes::account::handler_register),
        )
        .fallback(handler_not_found)
        .with_state(ctx)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .layer(
            // Graceful shutdown will wait for outstanding requests to complete.
            // The timeout also drops pending feed activations, which cancels
            // their outbound request.
            tower_http::timeout::TimeoutLayer::new(Duration::from_secs(30)),
        )
}

async fn run_server(addr: SocketAddr, ctx: Ctx) -> Result<(), anyhow::Error> {
    tracing::info!(
        listings_url = %ctx.feed.source().endpoint(),
        "starting server: {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("could not bind port")?;

    let app = build_router(ctx);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("received shutdown signal");
}

async fn handler_not_found() -> HtmlErrorPage {
    HtmlErrorPage(HtmlError::msg(
        "페이지를 찾을 수 없습니다.",
        StatusCode::NOT_FOUND,
    ))
}

struct HtmlError {
    message: String,
    status: StatusCode,
}

impl HtmlError {
    pub fn msg(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

struct HtmlErrorPage(HtmlError);

impl axum::response::IntoResponse for HtmlErrorPage {
    fn into_response(self) -> axum::response::Response<axum::body::Body> {
        let body = crate::server::ui::render_html_error_page(&self.0);

        (
            self.0.status,
            [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
async fn test_client_with_source(listings_url: Url) -> axum_test_helper::TestClient {
    let ctx = CtxBuilder::new(listings_url)
        .build()
        .expect("could not build server context");
    let app = build_router(ctx);
    axum_test_helper::TestClient::new(app).await
}
