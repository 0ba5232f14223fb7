//! Normalized catalog model.
//!
//! A `Pokemon` is built once per fetch, is immutable afterwards, and lives
//! only in memory. All display-oriented derivations (unit conversion,
//! localized labels, sprite slots, gender capability) happen at
//! construction time in `core::normalize`.

use serde::{Deserialize, Serialize};

/// Fixed statistic vocabulary, in canonical order.
pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// One named statistic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

// ============================================================================
// Sprite Variants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSex {
    Default,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Static,
    Animated,
}

/// The 8 sprite slots (orientation x sex x motion). Every slot is optional
/// except front/default/static, which normalization guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub front_default_animated: Option<String>,
    pub front_female_animated: Option<String>,
    pub back_default_animated: Option<String>,
    pub back_female_animated: Option<String>,
}

impl SpriteSet {
    /// Slot lookup by coordinates.
    pub fn get(&self, orientation: Orientation, sex: SpriteSex, motion: Motion) -> Option<&str> {
        use Motion::*;
        use Orientation::*;
        use SpriteSex::*;
        let slot = match (orientation, sex, motion) {
            (Front, Default, Static) => &self.front_default,
            (Front, Female, Static) => &self.front_female,
            (Back, Default, Static) => &self.back_default,
            (Back, Female, Static) => &self.back_female,
            (Front, Default, Animated) => &self.front_default_animated,
            (Front, Female, Animated) => &self.front_female_animated,
            (Back, Default, Animated) => &self.back_default_animated,
            (Back, Female, Animated) => &self.back_female_animated,
        };
        slot.as_deref()
    }
}

// ============================================================================
// Gender Capability
// ============================================================================

/// Sex-presentation capability derived from the species gender-rate scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderProfile {
    pub has_male: bool,
    pub has_female: bool,
    pub is_genderless: bool,
}

impl GenderProfile {
    /// -1 means no gender concept; 0..8 is the female share in eighths
    /// (0 = always male, 8 = always female, anything between = both occur).
    pub fn from_rate(rate: i8) -> Self {
        if rate == -1 {
            return Self {
                has_male: false,
                has_female: false,
                is_genderless: true,
            };
        }
        Self {
            has_male: rate != 8,
            has_female: rate != 0,
            is_genderless: false,
        }
    }
}

// ============================================================================
// Catalog Records
// ============================================================================

/// Lightweight listing reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub id: u32,
    pub name: String,
    /// Localized name when the listing was resolved with localization,
    /// absent otherwise.
    pub display_name: Option<String>,
}

/// The canonical per-creature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    /// Canonical (source-language-neutral) name.
    pub name: String,
    /// Localized name, canonical fallback.
    pub display_name: String,
    /// 1-2 type tags; the first is the primary type.
    pub types: Vec<String>,
    /// Localized type labels, parallel to `types`.
    pub display_types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
    /// Localized ability labels, parallel to `abilities`.
    pub display_abilities: Vec<String>,
    /// Exactly 6 entries in `STAT_ORDER` order.
    pub stats: Vec<StatValue>,
    pub sprites: SpriteSet,
    /// Resolved default static image (same as the front/default/static slot).
    pub image: String,
    /// Resolved default animated image, when the upstream has one.
    pub image_gif: Option<String>,
    pub gender: GenderProfile,
}

impl Pokemon {
    /// Aggregate strength: sum of the 6 stat values.
    pub fn total_stats(&self) -> u32 {
        self.stats.iter().map(|stat| stat.value).sum()
    }

    /// Value of one named stat; 0 if absent.
    pub fn stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|stat| stat.name == name)
            .map(|stat| stat.value)
            .unwrap_or(0)
    }

    /// Whether the type tag appears anywhere in the type list.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Primary (first) type tag.
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("")
    }
}

/// Minimal record for pure-logic tests across the crate.
#[cfg(test)]
pub(crate) fn sample(id: u32, name: &str, types: &[&str], stats: &[u32; 6]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        display_name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        display_types: types.iter().map(|t| t.to_string()).collect(),
        height_m: 0.4,
        weight_kg: 6.0,
        abilities: vec!["static".to_string()],
        display_abilities: vec!["static".to_string()],
        stats: STAT_ORDER
            .iter()
            .zip(stats.iter())
            .map(|(stat_name, value)| StatValue {
                name: stat_name.to_string(),
                value: *value,
            })
            .collect(),
        sprites: SpriteSet {
            front_default: Some(format!("https://img.example/{id}.png")),
            ..SpriteSet::default()
        },
        image: format!("https://img.example/{id}.png"),
        image_gif: None,
        gender: GenderProfile::from_rate(4),
    }
}
