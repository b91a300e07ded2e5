//! inventory::inventree
//!
//! InvenTree implementation of the `Inventory` trait using the REST API.
//!
//! # Design
//!
//! This module implements the `Inventory` trait against an InvenTree
//! server. All endpoints are REST with JSON bodies:
//! - `GET  stock/location/` (optionally `?parent=<id>`)
//! - `GET  stock/location-type/`
//! - `POST stock/location/`
//! - `PATCH stock/location/<id>/`
//! - `GET  <root>` for the server version
//!
//! # Authentication
//!
//! InvenTree uses static API tokens sent as `Authorization: Token <t>`.
//! Tokens do not expire on a refresh schedule, so there is no provider
//! or retry machinery; an invalid token surfaces as `AuthFailed`.
//!
//! # Example
//!
//! ```ignore
//! use locsmith::inventory::inventree::InvenTreeClient;
//! use locsmith::inventory::Inventory;
//!
//! let client = InvenTreeClient::new("https://inventree.example.com/api/", "inv-token");
//! let locations = client.list_locations().await?;
//! println!("{} locations", locations.len());
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{Inventory, InventoryError, NewLocation, ServerVersion};
use crate::core::types::{LocationRecord, LocationType};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "locsmith-cli";

/// InvenTree inventory adapter.
///
/// Holds a `reqwest::Client`, the API base URL (trailing slash required,
/// enforced by config validation) and a static token.
pub struct InvenTreeClient {
    /// HTTP client for making requests
    client: Client,
    /// API base URL, e.g. `https://inventree.example.com/api/`
    base_url: String,
    /// Static API token
    token: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for InvenTreeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvenTreeClient")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

impl InvenTreeClient {
    /// Create a new InvenTree client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL including the trailing slash
    /// * `token` - Static API token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an API endpoint path.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, InventoryError> {
        if self.token.is_empty() {
            return Err(InventoryError::AuthRequired);
        }

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Token {}", self.token))
            .map_err(|_| InventoryError::AuthFailed("token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, InventoryError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| InventoryError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Self::handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        response: Response,
        status: StatusCode,
    ) -> Result<T, InventoryError> {
        // DRF error bodies are usually {"detail": "..."}; anything else
        // degrades to a generic message.
        let message = match response.json::<InvenTreeErrorResponse>().await {
            Ok(err) => err.detail,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => {
                InventoryError::AuthFailed("Invalid or expired token".into())
            }
            StatusCode::FORBIDDEN => {
                InventoryError::AuthFailed(format!("Permission denied: {}", message))
            }
            StatusCode::NOT_FOUND => InventoryError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => InventoryError::RateLimited,
            _ if status.is_server_error() => InventoryError::ApiError {
                status: status.as_u16(),
                message: format!("InvenTree server error: {}", message),
            },
            _ => InventoryError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl Inventory for InvenTreeClient {
    fn name(&self) -> &'static str {
        "inventree"
    }

    async fn list_locations(&self) -> Result<Vec<LocationRecord>, InventoryError> {
        let url = self.endpoint_url("stock/location/");

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let locations: Vec<ApiLocation> = self.handle_response(response).await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    async fn list_sublocations(
        &self,
        parent_id: i64,
    ) -> Result<Vec<LocationRecord>, InventoryError> {
        let url = self.endpoint_url("stock/location/");

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[("parent", parent_id)])
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let locations: Vec<ApiLocation> = self.handle_response(response).await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    async fn list_location_types(&self) -> Result<Vec<LocationType>, InventoryError> {
        let url = self.endpoint_url("stock/location-type/");

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let types: Vec<ApiLocationType> = self.handle_response(response).await?;
        Ok(types.into_iter().map(Into::into).collect())
    }

    async fn create_location(
        &self,
        request: &NewLocation,
    ) -> Result<LocationRecord, InventoryError> {
        let url = self.endpoint_url("stock/location/");

        let body = CreateLocationBody {
            name: &request.name,
            description: &request.description,
            parent: request.parent,
            location_type: request.location_type,
        };

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let created: ApiLocation = self.handle_response(response).await?;
        Ok(created.into())
    }

    async fn set_location_parent(
        &self,
        location_id: i64,
        parent_id: i64,
    ) -> Result<(), InventoryError> {
        let url = self.endpoint_url(&format!("stock/location/{}/", location_id));

        let body = UpdateParentBody { parent: parent_id };

        let response = self
            .client
            .patch(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Self::handle_error_response(response, status).await
        }
    }

    async fn server_version(&self) -> Result<ServerVersion, InventoryError> {
        let url = self.endpoint_url("");

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| InventoryError::NetworkError(e.to_string()))?;

        let info: ApiVersionInfo = self.handle_response(response).await?;
        Ok(ServerVersion {
            server: info.server,
            version: info.version,
        })
    }
}

// --------------------------------------------------------------------------
// API Request/Response Types
// --------------------------------------------------------------------------

/// Request body for creating a location.
#[derive(Serialize)]
struct CreateLocationBody<'a> {
    name: &'a str,
    description: &'a str,
    parent: i64,
    location_type: i64,
}

/// Request body for reparenting a location.
#[derive(Serialize)]
struct UpdateParentBody {
    parent: i64,
}

/// InvenTree error response format.
#[derive(Deserialize)]
struct InvenTreeErrorResponse {
    detail: String,
}

/// Location response format (`pk` on the wire).
#[derive(Deserialize)]
struct ApiLocation {
    pk: i64,
    name: String,
    pathstring: String,
    parent: Option<i64>,
}

impl From<ApiLocation> for LocationRecord {
    fn from(loc: ApiLocation) -> Self {
        LocationRecord {
            id: loc.pk,
            name: loc.name,
            pathstring: loc.pathstring,
            parent_id: loc.parent,
        }
    }
}

/// Location type response format.
#[derive(Deserialize)]
struct ApiLocationType {
    pk: i64,
    name: String,
}

impl From<ApiLocationType> for LocationType {
    fn from(lt: ApiLocationType) -> Self {
        LocationType {
            id: lt.pk,
            name: lt.name,
        }
    }
}

/// Version info from the API root.
#[derive(Deserialize)]
struct ApiVersionInfo {
    server: String,
    version: String,
}
