//! Wire types for the consumed PokeAPI endpoints.
//!
//! Each struct mirrors one endpoint's JSON payload, with optionality made
//! explicit at the boundary: fields the API may omit or null (female sprite
//! variants, the animated sprite group) are `Option`, everything else is
//! required and a deserialization failure on it is a schema error.

use serde::Deserialize;

// ============================================================================
// Shared Fragments
// ============================================================================

/// A `{ name, url }` reference, used for list entries and nested resources.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded as the trailing path segment of the resource URL,
    /// e.g. `https://pokeapi.co/api/v2/pokemon/25/` -> 25.
    pub fn trailing_id(&self) -> Option<u32> {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()?
            .parse()
            .ok()
    }
}

/// One entry of a payload's `names` list: a label in a specific language.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// First label matching the given language tag, if any.
pub fn find_localized<'a>(names: &'a [LocalizedName], language: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| entry.name.as_str())
}

// ============================================================================
// GET /pokemon?limit=N
// ============================================================================

/// Paged catalog listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedList {
    pub results: Vec<NamedResource>,
}

// ============================================================================
// GET /pokemon/{name|id}
// ============================================================================

/// Full creature payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    pub sprites: RawSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Sprite section of the creature payload. Only the sources the normalizer
/// reads are modeled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
    #[serde(default)]
    pub versions: Option<SpriteVersions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteVersions {
    #[serde(rename = "generation-v")]
    pub generation_v: Option<GenerationVSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationVSprites {
    #[serde(rename = "black-white")]
    pub black_white: Option<BlackWhiteSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlackWhiteSprites {
    pub animated: Option<AnimatedSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimatedSprites {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub back_default: Option<String>,
    pub back_female: Option<String>,
}

// ============================================================================
// GET /pokemon-species/{id|name}
// ============================================================================

/// Species payload: localized names plus the gender-rate scalar.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    /// -1 = genderless; 0..8 = female share in eighths.
    pub gender_rate: i8,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

// ============================================================================
// GET /type/{name} and GET /ability/{name}
// ============================================================================

/// Type payload; only the localized names are consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// Ability payload; only the localized names are consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAbility {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}
