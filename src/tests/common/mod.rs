//! Upstream payload builders for the wiremock-backed suites.
//!
//! Each builder produces the minimal JSON shape the corresponding endpoint
//! serves, with knobs for the fields the tests vary.

use serde_json::{json, Value};

/// Paged listing payload; entry URLs carry the ids the accessor parses.
pub fn list_payload(entries: &[(u32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| {
            json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            })
        })
        .collect();
    json!({ "count": entries.len(), "results": results })
}

/// Full creature payload with the standard 6-stat block.
pub fn pokemon_payload(
    id: u32,
    name: &str,
    height_dm: u32,
    weight_hg: u32,
    types: &[&str],
    abilities: &[&str],
    stats: [u32; 6],
) -> Value {
    let stat_names = [
        "hp",
        "attack",
        "defense",
        "special-attack",
        "special-defense",
        "speed",
    ];
    json!({
        "id": id,
        "name": name,
        "height": height_dm,
        "weight": weight_hg,
        "types": types.iter().enumerate().map(|(index, tag)| json!({
            "slot": index + 1,
            "type": { "name": tag, "url": format!("https://pokeapi.co/api/v2/type/{tag}/") },
        })).collect::<Vec<_>>(),
        "abilities": abilities.iter().map(|tag| json!({
            "ability": { "name": tag, "url": format!("https://pokeapi.co/api/v2/ability/{tag}/") },
        })).collect::<Vec<_>>(),
        "stats": stat_names.iter().zip(stats.iter()).map(|(stat_name, value)| json!({
            "base_stat": value,
            "stat": { "name": stat_name, "url": "" },
        })).collect::<Vec<_>>(),
        "sprites": {
            "front_default": format!("https://img.example/{id}.png"),
            "front_female": null,
            "back_default": format!("https://img.example/{id}-back.png"),
            "back_female": null,
            "other": {
                "official-artwork": { "front_default": format!("https://img.example/{id}-art.png") }
            },
            "versions": {
                "generation-v": {
                    "black-white": {
                        "animated": {
                            "front_default": format!("https://img.example/{id}.gif"),
                            "front_female": null,
                            "back_default": null,
                            "back_female": null
                        }
                    }
                }
            }
        }
    })
}

/// Species payload with an optional Japanese name entry.
pub fn species_payload(gender_rate: i8, ja_name: Option<&str>) -> Value {
    let mut names = vec![json!({
        "name": "english-name",
        "language": { "name": "en", "url": "" },
    })];
    if let Some(ja) = ja_name {
        names.push(json!({
            "name": ja,
            "language": { "name": "ja", "url": "" },
        }));
    }
    json!({ "gender_rate": gender_rate, "names": names })
}

/// Type payload carrying one Japanese label.
pub fn type_payload(ja_name: &str) -> Value {
    json!({
        "names": [
            { "name": ja_name, "language": { "name": "ja", "url": "" } },
        ]
    })
}

/// Ability payload carrying one Japanese label.
pub fn ability_payload(ja_name: &str) -> Value {
    json!({
        "names": [
            { "name": ja_name, "language": { "name": "ja", "url": "" } },
        ]
    })
}
