//! HTTP client for the Revenda records backend
//!
//! Thin wrapper over `reqwest` that speaks the backend's record endpoints
//! and converts every failure into a [`revenda_core::Error`] whose message
//! is fit for a user-facing notification.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use reqwest::{Client, Response};
use revenda_core::{Car, CarsGateway, Config, Error, Result};
use tracing::debug;

/// API client for the car records backend
#[derive(Debug, Clone)]
pub struct CarsClient {
    client: Client,
    base_url: String,
}

impl CarsClient {
    /// Create a client against `base_url` (any trailing slash is dropped).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from the application configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Fetch the full car list, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the payload cannot be parsed.
    pub async fn list_cars(&self) -> Result<Vec<Car>> {
        let url = format!("{}/cars?by=id", self.base_url);
        debug!(%url, "fetching car list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;

        let body = response.bytes().await.map_err(transport_error)?;
        let cars: Vec<Car> = serde_json::from_slice(&body)?;
        debug!(count = cars.len(), "car list fetched");
        Ok(cars)
    }

    /// Delete the car with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a
    /// non-success status.
    pub async fn delete_car(&self, id: i64) -> Result<()> {
        let url = format!("{}/cars/{id}", self.base_url);
        debug!(%url, "deleting car");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}

impl CarsGateway for CarsClient {
    async fn fetch_all(&self) -> Result<Vec<Car>> {
        self.list_cars().await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.delete_car(id).await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Http(err.to_string())
}

/// Turn a non-success response into an [`Error::Api`] carrying the most
/// useful message available: a `message` field from a JSON body, the raw
/// body text, or the status's canonical reason.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.unwrap_or_default();
    let raw = raw.trim();
    let message = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| {
            if raw.is_empty() {
                status.canonical_reason().unwrap_or("erro desconhecido").to_string()
            } else {
                raw.to_string()
            }
        });

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}
