use anyhow::Context;
use reqwest::StatusCode;
use url::Url;

use crate::listing::{decode_listings, DecodeError, ListingSummary};

pub const DEFAULT_LISTINGS_URL: &str = "https://tteonabom-backend.onrender.com/accommodations/";

/// Client for the remote listing endpoint.
///
/// Requests are plain GETs without parameters, body or auth headers.
/// No request timeout is applied: callers cancel by dropping the future.
#[derive(Clone, Debug)]
pub struct ListingSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl ListingSource {
    pub fn new(endpoint: Url) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .user_agent("tteonabom")
            .build()
            .context("could not build http client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn fetch_listings(&self) -> Result<Vec<ListingSummary>, FetchError> {
        tracing::trace!("fetching listings");

        let res = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await.map_err(FetchError::Transport)?;
        let listings = decode_listings(&body).map_err(FetchError::Parse)?;

        tracing::debug!(count = listings.len(), "listings fetched");

        Ok(listings)
    }
}

/// Ways a listing fetch can fail.
///
/// All of them end up as the same message for the user; the distinction only
/// matters for diagnostics.
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    Status(StatusCode),
    Parse(DecodeError),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "listing request failed: {}", err),
            FetchError::Status(status) => {
                write!(f, "listing source returned non-success status {}", status)
            }
            FetchError::Parse(err) => write!(f, "could not parse listings: {}", err),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            FetchError::Status(_) => None,
            FetchError::Parse(err) => Some(err),
        }
    }
}
