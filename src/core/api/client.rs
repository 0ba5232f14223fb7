//! Async HTTP client for the upstream REST API.
//!
//! Thin wrapper over `reqwest` with a configurable base URL so tests can
//! point it at a local mock server. No caching, no retries: every call is a
//! fresh GET against the upstream.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::core::api::types::{PagedList, RawAbility, RawPokemon, RawSpecies, RawType};
use crate::core::error::{CatalogError, Result};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                query: path.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(CatalogError::Api {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// First `limit` catalog entries, ascending id.
    pub async fn list_pokemon(&self, limit: u32) -> Result<PagedList> {
        self.get_json(&format!("pokemon?limit={limit}")).await
    }

    /// Full creature payload by canonical name or numeric id.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<RawPokemon> {
        self.get_json(&format!("pokemon/{}", urlencoding::encode(name_or_id)))
            .await
    }

    /// Species payload (localized names, gender rate) by name or id.
    pub async fn fetch_species(&self, name_or_id: &str) -> Result<RawSpecies> {
        self.get_json(&format!(
            "pokemon-species/{}",
            urlencoding::encode(name_or_id)
        ))
        .await
    }

    /// Type payload (localized type labels) by canonical type name.
    pub async fn fetch_type(&self, name: &str) -> Result<RawType> {
        self.get_json(&format!("type/{}", urlencoding::encode(name)))
            .await
    }

    /// Ability payload (localized ability labels) by canonical ability name.
    pub async fn fetch_ability(&self, name: &str) -> Result<RawAbility> {
        self.get_json(&format!("ability/{}", urlencoding::encode(name)))
            .await
    }
}
