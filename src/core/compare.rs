//! Side-by-side comparison: aggregate-strength winner and simplified type
//! effectiveness.
//!
//! The effectiveness chart is a fixed, simplified single-generation table,
//! not the full official chart. Both directions of a matchup are computed
//! from the same two lookup tables; `normal` attacks have no entries and
//! always multiply by 1.

use serde::Serialize;

use crate::core::model::Pokemon;

/// Which side of a comparison won on aggregate strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    First,
    Second,
}

/// Outcome of comparing two records. Purely informational; neither input is
/// touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub total_first: u32,
    pub total_second: u32,
    /// `None` on equal totals: an explicit tie.
    pub winner: Option<Side>,
    /// Multiplier of the first side attacking the second.
    pub effectiveness_first: f64,
    /// Multiplier of the second side attacking the first.
    pub effectiveness_second: f64,
}

/// Compare two records: strictly greater aggregate wins, equal is a tie.
pub fn compare(first: &Pokemon, second: &Pokemon) -> Comparison {
    let total_first = first.total_stats();
    let total_second = second.total_stats();
    let winner = if total_first > total_second {
        Some(Side::First)
    } else if total_second > total_first {
        Some(Side::Second)
    } else {
        None
    };

    Comparison {
        total_first,
        total_second,
        winner,
        effectiveness_first: offensive_multiplier(first, second),
        effectiveness_second: offensive_multiplier(second, first),
    }
}

/// Compound multiplier of every attacking type against the defender's full
/// type set. Each of the attacker's 1-2 types contributes its own
/// per-defending-type factors; all factors multiply.
pub fn offensive_multiplier(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    attacker
        .types
        .iter()
        .map(|attacking| type_effectiveness(attacking, &defender.types))
        .product()
}

/// Multiplier of one attacking type against a defending type set. Every
/// defending type found in the attacking type's super-effective list
/// contributes x2, every one found in its not-very-effective list
/// contributes x0.5; anything else contributes x1.
pub fn type_effectiveness(attacking: &str, defending: &[String]) -> f64 {
    let mut multiplier = 1.0;
    for defending_type in defending {
        if super_effective(attacking).contains(&defending_type.as_str()) {
            multiplier *= 2.0;
        } else if not_very_effective(attacking).contains(&defending_type.as_str()) {
            multiplier *= 0.5;
        }
    }
    multiplier
}

fn super_effective(attacking: &str) -> &'static [&'static str] {
    match attacking {
        "fire" => &["grass", "bug", "ice", "steel"],
        "water" => &["fire", "ground", "rock"],
        "electric" => &["water", "flying"],
        "grass" => &["water", "ground", "rock"],
        "ice" => &["grass", "ground", "flying", "dragon"],
        "fighting" => &["normal", "ice", "rock", "dark", "steel"],
        "poison" => &["grass", "fairy"],
        "ground" => &["fire", "electric", "poison", "rock", "steel"],
        "flying" => &["grass", "fighting", "bug"],
        "psychic" => &["fighting", "poison"],
        "bug" => &["grass", "psychic", "dark"],
        "rock" => &["fire", "ice", "flying", "bug"],
        "ghost" => &["psychic", "ghost"],
        "dragon" => &["dragon"],
        "dark" => &["psychic", "ghost"],
        "steel" => &["ice", "rock", "fairy"],
        "fairy" => &["fighting", "dragon", "dark"],
        _ => &[],
    }
}

fn not_very_effective(attacking: &str) -> &'static [&'static str] {
    match attacking {
        "fire" => &["fire", "water", "rock", "dragon"],
        "water" => &["water", "grass", "dragon"],
        "electric" => &["electric", "grass", "dragon"],
        "grass" => &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"],
        "ice" => &["fire", "water", "ice", "steel"],
        "fighting" => &["poison", "flying", "psychic", "bug", "fairy"],
        "poison" => &["poison", "ground", "rock", "ghost"],
        "ground" => &["grass", "bug"],
        "flying" => &["electric", "rock", "steel"],
        "psychic" => &["psychic", "steel"],
        "bug" => &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"],
        "rock" => &["fighting", "ground", "steel"],
        "ghost" => &["dark"],
        "dragon" => &["steel"],
        "dark" => &["fighting", "dark", "fairy"],
        "steel" => &["fire", "water", "electric", "steel"],
        "fairy" => &["fire", "poison", "steel"],
        _ => &[],
    }
}
