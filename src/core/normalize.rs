//! Entity normalization: raw endpoint payloads -> `Pokemon`.
//!
//! One normalization performs the species lookup plus one type lookup and
//! one ability lookup per tag, all issued concurrently and collected
//! positionally. The species payload is core (it carries the gender rate)
//! and its failure propagates; type and ability lookups are localization
//! only and fall back to the canonical name on any failure.

use futures::future::join_all;

use crate::core::api::types::{find_localized, RawPokemon, RawSprites, StatSlot};
use crate::core::api::ApiClient;
use crate::core::error::{CatalogError, Result};
use crate::core::model::{GenderProfile, Pokemon, SpriteSet, StatValue, STAT_ORDER};

/// Build one normalized record from a fetched creature payload.
pub async fn normalize(client: &ApiClient, language: &str, raw: RawPokemon) -> Result<Pokemon> {
    let type_tags: Vec<String> = raw.types.iter().map(|slot| slot.kind.name.clone()).collect();
    let ability_tags: Vec<String> = raw
        .abilities
        .iter()
        .map(|slot| slot.ability.name.clone())
        .collect();

    // Fan-out: species + per-type + per-ability lookups run concurrently;
    // results are collected positionally, never by completion order.
    let species_id = raw.id.to_string();
    let (species, display_types, display_abilities) = futures::join!(
        client.fetch_species(&species_id),
        join_all(
            type_tags
                .iter()
                .map(|tag| localize_type(client, language, tag))
        ),
        join_all(
            ability_tags
                .iter()
                .map(|tag| localize_ability(client, language, tag))
        ),
    );
    let species = species?;

    let display_name = find_localized(&species.names, language)
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::debug!("no {language} name for species {}", raw.name);
            raw.name.clone()
        });

    let stats = order_stats(&raw.stats)?;
    let sprites = resolve_sprites(&raw.sprites);
    let image = sprites
        .front_default
        .clone()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| CatalogError::Schema(format!("no default sprite for {}", raw.name)))?;
    let image_gif = sprites.front_default_animated.clone();

    Ok(Pokemon {
        id: raw.id,
        name: raw.name,
        display_name,
        types: type_tags,
        display_types,
        height_m: f64::from(raw.height) / 10.0,
        weight_kg: f64::from(raw.weight) / 10.0,
        abilities: ability_tags,
        display_abilities,
        stats,
        sprites,
        image,
        image_gif,
        gender: GenderProfile::from_rate(species.gender_rate),
    })
}

/// Localized species name for a listing entry. Recovers to the canonical
/// name on any failure: in a listing there is nothing else the species
/// payload is needed for.
pub async fn localize_species_name(
    client: &ApiClient,
    language: &str,
    id: u32,
    canonical: &str,
) -> String {
    match client.fetch_species(&id.to_string()).await {
        Ok(species) => find_localized(&species.names, language)
            .map(str::to_string)
            .unwrap_or_else(|| canonical.to_string()),
        Err(err) => {
            log::debug!("species lookup failed for {canonical}: {err}");
            canonical.to_string()
        }
    }
}

async fn localize_type(client: &ApiClient, language: &str, tag: &str) -> String {
    match client.fetch_type(tag).await {
        Ok(payload) => find_localized(&payload.names, language)
            .map(str::to_string)
            .unwrap_or_else(|| tag.to_string()),
        Err(err) => {
            log::debug!("type lookup failed for {tag}: {err}");
            tag.to_string()
        }
    }
}

async fn localize_ability(client: &ApiClient, language: &str, tag: &str) -> String {
    match client.fetch_ability(tag).await {
        Ok(payload) => find_localized(&payload.names, language)
            .map(str::to_string)
            .unwrap_or_else(|| tag.to_string()),
        Err(err) => {
            log::debug!("ability lookup failed for {tag}: {err}");
            tag.to_string()
        }
    }
}

/// Reorder raw stats into the fixed 6-name vocabulary. A payload missing any
/// of the six is a schema deviation.
fn order_stats(raw: &[StatSlot]) -> Result<Vec<StatValue>> {
    STAT_ORDER
        .iter()
        .map(|name| {
            raw.iter()
                .find(|slot| slot.stat.name == *name)
                .map(|slot| StatValue {
                    name: name.to_string(),
                    value: slot.base_stat,
                })
                .ok_or_else(|| CatalogError::Schema(format!("missing stat {name}")))
        })
        .collect()
}

/// Resolve the 8 sprite slots. Each slot reads its sources in fixed priority
/// order; only front/default/static has a two-deep chain (the
/// official-artwork render, then the plain sprite).
fn resolve_sprites(raw: &RawSprites) -> SpriteSet {
    let artwork_front = raw
        .other
        .as_ref()
        .and_then(|other| other.official_artwork.as_ref())
        .and_then(|artwork| artwork.front_default.clone());
    let animated = raw
        .versions
        .as_ref()
        .and_then(|versions| versions.generation_v.as_ref())
        .and_then(|generation| generation.black_white.as_ref())
        .and_then(|black_white| black_white.animated.as_ref());

    SpriteSet {
        front_default: artwork_front.or_else(|| raw.front_default.clone()),
        front_female: raw.front_female.clone(),
        back_default: raw.back_default.clone(),
        back_female: raw.back_female.clone(),
        front_default_animated: animated.and_then(|group| group.front_default.clone()),
        front_female_animated: animated.and_then(|group| group.front_female.clone()),
        back_default_animated: animated.and_then(|group| group.back_default.clone()),
        back_female_animated: animated.and_then(|group| group.back_female.clone()),
    }
}
