//! List/detail accessor over the upstream catalog.
//!
//! Every call re-fetches from the upstream; there is deliberately no cache
//! between calls. Bulk materialization is join-all: one failed entry fails
//! the whole batch.

use futures::future::{join_all, try_join_all};

use crate::core::api::ApiClient;
use crate::core::error::Result;
use crate::core::model::{Pokemon, PokemonRef};
use crate::core::normalize::{localize_species_name, normalize};

pub struct Catalog {
    client: ApiClient,
    language: String,
}

impl Catalog {
    pub fn new(client: ApiClient, language: impl Into<String>) -> Self {
        Self {
            client,
            language: language.into(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Lightweight references for the first `limit` catalog entries,
    /// ascending id. Entries whose listing URL carries no parseable id are
    /// dropped with a warning rather than failing the page.
    pub async fn list(&self, limit: u32) -> Result<Vec<PokemonRef>> {
        let page = self.client.list_pokemon(limit).await?;
        let refs = page
            .results
            .into_iter()
            .filter_map(|entry| match entry.trailing_id() {
                Some(id) => Some(PokemonRef {
                    id,
                    name: entry.name,
                    display_name: None,
                }),
                None => {
                    log::warn!("listing entry {} has no parseable id, skipping", entry.name);
                    None
                }
            })
            .collect();
        Ok(refs)
    }

    /// Same references, each augmented with its localized display name.
    /// The per-entry species lookups run concurrently; a failed lookup
    /// falls back to the canonical name.
    pub async fn list_localized(&self, limit: u32) -> Result<Vec<PokemonRef>> {
        let refs = self.list(limit).await?;
        let names = join_all(refs.iter().map(|entry| {
            localize_species_name(&self.client, &self.language, entry.id, &entry.name)
        }))
        .await;
        Ok(refs
            .into_iter()
            .zip(names)
            .map(|(entry, display_name)| PokemonRef {
                display_name: Some(display_name),
                ..entry
            })
            .collect())
    }

    /// One fully normalized record by canonical name or numeric id.
    pub async fn get(&self, name_or_id: &str) -> Result<Pokemon> {
        let raw = self.client.fetch_pokemon(name_or_id).await?;
        normalize(&self.client, &self.language, raw).await
    }

    /// One fully normalized record by numeric id.
    pub async fn get_by_id(&self, id: u32) -> Result<Pokemon> {
        self.get(&id.to_string()).await
    }

    /// Fetch and normalize the first `limit` entries in parallel. Join-all
    /// semantics: any one failure fails the batch.
    pub async fn materialize(&self, limit: u32) -> Result<Vec<Pokemon>> {
        let refs = self.list(limit).await?;
        try_join_all(refs.iter().map(|entry| self.get(&entry.name))).await
    }
}

// ============================================================================
// In-Memory Search/Filter
// ============================================================================

/// Filter a materialized set by optional type tag and free-text query.
pub fn filter<'a>(
    set: &'a [Pokemon],
    query: &str,
    type_tag: Option<&str>,
) -> Vec<&'a Pokemon> {
    set.iter()
        .filter(|pokemon| type_tag.map_or(true, |tag| pokemon.has_type(tag)))
        .filter(|pokemon| matches_query(pokemon, query))
        .collect()
}

/// Case-insensitive substring match against the numeric id (plain and
/// zero-padded to 3 digits), the canonical name, and the localized name.
pub fn matches_query(pokemon: &Pokemon, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let id = pokemon.id.to_string();
    let padded = format!("{:03}", pokemon.id);
    id.contains(&query)
        || padded.contains(&query)
        || pokemon.name.to_lowercase().contains(&query)
        || pokemon.display_name.to_lowercase().contains(&query)
}
