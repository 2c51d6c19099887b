use serde::{Deserialize, Serialize};

/// Body of `GET /`. A missing `short_url` is treated as the empty code.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub original_url: String,
}

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub url: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
