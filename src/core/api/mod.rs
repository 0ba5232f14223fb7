//! Upstream API boundary: wire schema types and the async HTTP client.
//!
//! The rest of the crate never touches raw JSON; everything above this
//! module works with the normalized model in `core::model`.

pub mod client;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use types::{
    find_localized, AnimatedSprites, LocalizedName, NamedResource, PagedList, RawAbility,
    RawPokemon, RawSpecies, RawSprites, RawType,
};
