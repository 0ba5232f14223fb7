//! API client tests against a wiremock upstream: request paths, success
//! parsing, and the error taxonomy (404 vs other failure statuses).

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::api::ApiClient;
use crate::core::error::CatalogError;
use crate::tests::common::{list_payload, pokemon_payload, species_payload};

#[tokio::test]
async fn test_list_pokemon_hits_paged_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "151"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_payload(&[(1, "bulbasaur"), (2, "ivysaur")])),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let page = client.list_pokemon(151).await.unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[1].trailing_id(), Some(2));
}

#[tokio::test]
async fn test_fetch_pokemon_parses_full_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_payload(
            25,
            "pikachu",
            4,
            60,
            &["electric"],
            &["static", "lightning-rod"],
            [35, 55, 40, 50, 50, 90],
        )))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let raw = client.fetch_pokemon("pikachu").await.unwrap();
    assert_eq!(raw.id, 25);
    assert_eq!(raw.height, 4);
    assert_eq!(raw.types.len(), 1);
    assert_eq!(raw.abilities.len(), 2);
    assert_eq!(raw.stats.len(), 6);
    assert_eq!(
        raw.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref()),
        Some("https://img.example/25-art.png")
    );
}

#[tokio::test]
async fn test_missing_entry_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.fetch_pokemon("missingno").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn test_server_failure_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.fetch_species("25").await.unwrap_err();
    assert!(matches!(err, CatalogError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_trailing_base_url_slash_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_payload(1, None)))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri()));
    let species = client.fetch_species("1").await.unwrap();
    assert_eq!(species.gender_rate, 1);
}
