//! Accessor and normalization tests against a wiremock upstream: full
//! normalization, localization fallback, failure propagation, and the
//! join-all semantics of bulk materialization.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::api::ApiClient;
use crate::core::catalog::Catalog;
use crate::core::error::CatalogError;
use crate::core::model::{Motion, Orientation, SpriteSex};
use crate::tests::common::{
    ability_payload, list_payload, pokemon_payload, species_payload, type_payload,
};

fn catalog_for(server: &MockServer) -> Catalog {
    Catalog::new(ApiClient::new(server.uri()), "ja")
}

/// Mount the full endpoint set for one fully-localizable entry.
async fn mount_pikachu(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_payload(
            25,
            "pikachu",
            4,
            60,
            &["electric"],
            &["static"],
            [35, 55, 40, 50, 50, 90],
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(species_payload(4, Some("ピカチュウ"))),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/electric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_payload("でんき")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/static"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ability_payload("せいでんき")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_normalizes_full_record() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;

    let pokemon = catalog_for(&server).get("pikachu").await.unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.display_name, "ピカチュウ");
    assert_eq!(pokemon.types, vec!["electric"]);
    assert_eq!(pokemon.display_types, vec!["でんき"]);
    assert_eq!(pokemon.display_abilities, vec!["せいでんき"]);
    // Decimeters/hectograms divided by 10, unrounded.
    assert_eq!(pokemon.height_m, 0.4);
    assert_eq!(pokemon.weight_kg, 6.0);
    // Stats arrive in the fixed vocabulary order.
    assert_eq!(pokemon.stats[0].name, "hp");
    assert_eq!(pokemon.stats[5].name, "speed");
    assert_eq!(pokemon.total_stats(), 320);
    // The default slot resolved from the official-artwork source.
    assert_eq!(pokemon.image, "https://img.example/25-art.png");
    assert_eq!(
        pokemon
            .sprites
            .get(Orientation::Front, SpriteSex::Default, Motion::Static),
        Some("https://img.example/25-art.png")
    );
    assert_eq!(
        pokemon
            .sprites
            .get(Orientation::Back, SpriteSex::Default, Motion::Static),
        Some("https://img.example/25-back.png")
    );
    assert_eq!(
        pokemon
            .sprites
            .get(Orientation::Front, SpriteSex::Female, Motion::Static),
        None
    );
    assert_eq!(pokemon.image_gif.as_deref(), Some("https://img.example/25.gif"));
    assert!(pokemon.gender.has_male);
    assert!(pokemon.gender.has_female);
    assert!(!pokemon.gender.is_genderless);
}

#[tokio::test]
async fn test_localization_miss_falls_back_to_canonical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_payload(
            25,
            "pikachu",
            4,
            60,
            &["electric"],
            &["static"],
            [35, 55, 40, 50, 50, 90],
        )))
        .mount(&server)
        .await;
    // Species resolves but has no Japanese entry; type and ability lookups
    // fail outright. All three recover to canonical names.
    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_payload(4, None)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/electric"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/static"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let pokemon = catalog_for(&server).get("pikachu").await.unwrap();
    assert_eq!(pokemon.display_name, "pikachu");
    assert_eq!(pokemon.display_types, vec!["electric"]);
    assert_eq!(pokemon.display_abilities, vec!["static"]);
}

#[tokio::test]
async fn test_species_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_payload(
            25,
            "pikachu",
            4,
            60,
            &["electric"],
            &["static"],
            [35, 55, 40, 50, 50, 90],
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/electric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_payload("でんき")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/static"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ability_payload("せいでんき")))
        .mount(&server)
        .await;

    let err = catalog_for(&server).get("pikachu").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_parses_ids_from_entry_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_payload(&[
            (1, "bulbasaur"),
            (2, "ivysaur"),
            (3, "venusaur"),
        ])))
        .mount(&server)
        .await;

    let refs = catalog_for(&server).list(3).await.unwrap();
    let ids: Vec<u32> = refs.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(refs.iter().all(|entry| entry.display_name.is_none()));
}

#[tokio::test]
async fn test_list_localized_recovers_per_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_payload(&[(1, "bulbasaur"), (2, "ivysaur")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(species_payload(1, Some("フシギダネ"))),
        )
        .mount(&server)
        .await;
    // The second species lookup fails; its entry keeps the canonical name.
    Mock::given(method("GET"))
        .and(path("/pokemon-species/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let refs = catalog_for(&server).list_localized(2).await.unwrap();
    assert_eq!(refs[0].display_name.as_deref(), Some("フシギダネ"));
    assert_eq!(refs[1].display_name.as_deref(), Some("ivysaur"));
}

#[tokio::test]
async fn test_materialize_joins_all_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_payload(&[(25, "pikachu")])))
        .mount(&server)
        .await;
    mount_pikachu(&server).await;

    let set = catalog_for(&server).materialize(1).await.unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].display_name, "ピカチュウ");
}

#[tokio::test]
async fn test_materialize_fails_batch_on_one_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_payload(&[(25, "pikachu"), (133, "eevee")])),
        )
        .mount(&server)
        .await;
    mount_pikachu(&server).await;
    Mock::given(method("GET"))
        .and(path("/pokemon/eevee"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = catalog_for(&server).materialize(2).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}
