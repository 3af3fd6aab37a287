use std::collections::HashSet;

use url::Url;

/// Seeded placeholder image service. The same seed always yields the same
/// picture.
const IMAGE_SEED_BASE: &str = "https://picsum.photos/seed/";
const IMAGE_WIDTH: u32 = 400;
const IMAGE_HEIGHT: u32 = 250;

/// Identifier of a listing as returned by the listing source.
///
/// The backend currently emits integers, but string ids are accepted too.
/// Integers beyond `i64::MAX` land in [`ListingId::Unsigned`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{}", n),
            ListingId::Unsigned(n) => write!(f, "{}", n),
            ListingId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ListingId {
    fn from(value: i64) -> Self {
        ListingId::Number(value)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        ListingId::Text(value.to_string())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListingOwner {
    pub email: String,
}

/// A single accommodation as shown in the listing feed.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListingSummary {
    pub id: ListingId,
    pub name: String,
    pub location: String,
    pub owner: ListingOwner,
}

impl ListingSummary {
    pub fn new(
        id: impl Into<ListingId>,
        name: impl Into<String>,
        location: impl Into<String>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            owner: ListingOwner {
                email: owner_email.into(),
            },
        }
    }

    /// Placeholder image for this listing, seeded with the listing id.
    pub fn image_url(&self) -> Url {
        let mut url = Url::parse(IMAGE_SEED_BASE).expect("invalid image service base url");
        url.path_segments_mut()
            .expect("image service url can not be a base")
            .pop_if_empty()
            .push(&self.id.to_string())
            .push(&IMAGE_WIDTH.to_string())
            .push(&IMAGE_HEIGHT.to_string());
        url
    }
}

#[derive(Debug)]
pub enum DecodeError {
    Json(serde_path_to_error::Error<serde_json::Error>),
    DuplicateId(ListingId),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Json(err) => write!(f, "invalid listing data: {}", err),
            DecodeError::DuplicateId(id) => write!(f, "duplicate listing id: {}", id),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => Some(err),
            DecodeError::DuplicateId(_) => None,
        }
    }
}

/// Decode a listing source response body.
///
/// Every record must carry an id, name, location and owner email, and ids
/// must be unique. Anything else rejects the whole response. Order is kept.
pub fn decode_listings(raw: &str) -> Result<Vec<ListingSummary>, DecodeError> {
    let jd = &mut serde_json::Deserializer::from_str(raw);
    let listings: Vec<ListingSummary> =
        serde_path_to_error::deserialize(jd).map_err(DecodeError::Json)?;

    let mut seen = HashSet::new();
    for listing in &listings {
        if !seen.insert(&listing.id) {
            return Err(DecodeError::DuplicateId(listing.id.clone()));
        }
    }

    Ok(listings)
}
