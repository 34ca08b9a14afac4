//! End-to-end tests for the skinpro-api facade: catalog operations driven
//! through `CatalogClient` against mock backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use skinpro_api::{CatalogClient, ClientConfig, ImageAttachment, NewGame, NewItem, Rarity, RetryConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// TCP server that drops connections according to `drop_pattern` and then
/// answers everything with a canned 200 JSON response.
async fn flaky_server(drop_pattern: Vec<bool>, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_task = hits.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let n = hits_task.fetch_add(1, Ordering::SeqCst);
            if drop_pattern.get(n).copied().unwrap_or(false) {
                drop(socket);
                continue;
            }
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), hits)
}

fn fast_retry_config() -> ClientConfig {
    ClientConfig::builder()
        .with_retry(
            RetryConfig::default()
                .with_max_retries(2)
                .with_initial_delay(Duration::from_millis(20)),
        )
        .build()
}

#[tokio::test]
async fn item_crud_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "1", "nome": "Fade", "jogoId": "7", "raridade": "raro"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/item/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            {"id": "2", "nome": "AWP Dragon Lore", "jogoId": "7", "raridade": "lendario"}
        )))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/item/update/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            {"id": "2", "nome": "AWP Dragon Lore", "jogoId": "7", "raridade": "mitico"}
        )))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/item/delete/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = CatalogClient::new(server.uri()).unwrap();

    let items = client.list_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].rarity, Rarity::Rare);

    let new_item = NewItem {
        name: "AWP Dragon Lore".to_string(),
        description: "Classic sniper skin".to_string(),
        game_id: "7".to_string(),
        category: "sniper".to_string(),
        rarity: Rarity::Legendary,
    };
    let image = ImageAttachment::new("lore.png", "image/png", vec![0x89u8, 0x50, 0x4e, 0x47]);
    let created = client.create_item(&new_item, Some(&image)).await.unwrap();
    assert_eq!(created.id, "2");

    let updated = client.update_item("2", &new_item, None).await.unwrap();
    assert_eq!(updated.rarity, Rarity::Mythic);

    client.delete_item("2").await.unwrap();
}

#[tokio::test]
async fn game_crud_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jogo/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "7", "nome": "CS2"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/jogo/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "8", "nome": "Valorant"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/jogo/delete/8"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = CatalogClient::new(server.uri()).unwrap();

    let games = client.list_games().await.unwrap();
    assert_eq!(games[0].name, "CS2");

    let game = NewGame {
        name: "Valorant".to_string(),
    };
    let logo = ImageAttachment::new("v.png", "image/png", vec![1u8]);
    let created = client.create_game(&game, Some(&logo), None).await.unwrap();
    assert_eq!(created.id, "8");

    client.delete_game("8").await.unwrap();
}

#[tokio::test]
async fn writes_use_transport_computed_multipart_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/item/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "3", "nome": "Fade"})),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(server.uri()).unwrap();
    let new_item = NewItem {
        name: "Fade".to_string(),
        description: String::new(),
        game_id: "7".to_string(),
        category: "knife".to_string(),
        rarity: Rarity::Rare,
    };
    client.create_item(&new_item, None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {content_type}"
    );
}

#[tokio::test]
async fn every_request_carries_a_cache_bust_stamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = CatalogClient::new(server.uri()).unwrap();
    client.list_items().await.unwrap();
    client.list_items().await.unwrap();

    let received = server.received_requests().await.unwrap();
    let stamps: Vec<i64> = received
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "_t")
                .expect("missing _t parameter")
                .1
                .parse()
                .unwrap()
        })
        .collect();
    assert_eq!(stamps.len(), 2);
    assert!(stamps[1] > stamps[0]);
}

#[tokio::test]
async fn list_recovers_after_two_network_failures() {
    // Two generic network failures, then success on the final allowed attempt.
    let (base, hits) = flaky_server(
        vec![true, true],
        r#"[{"id":"1","nome":"Fade","raridade":"raro"}]"#,
    )
    .await;

    let client = CatalogClient::with_config(&base, fast_retry_config()).unwrap();
    let items = client.list_items().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Fade");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn success_resets_retry_budget_between_operations() {
    // Two rounds of fail-once-then-succeed with a single retry allowed:
    // only a counter reset after the first success makes the second pass.
    let (base, hits) = flaky_server(vec![true, false, true, false], "[]").await;

    let config = ClientConfig::builder()
        .with_retry(
            RetryConfig::default()
                .with_max_retries(1)
                .with_initial_delay(Duration::from_millis(20)),
        )
        .build();
    let client = CatalogClient::with_config(&base, config).unwrap();

    client.list_items().await.unwrap();
    client.list_items().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn unreachable_backend_reports_service_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        CatalogClient::with_config(format!("http://{addr}"), fast_retry_config()).unwrap();
    let err = client.list_items().await.unwrap_err();

    assert!(err.is_service_unavailable(), "got: {err}");
}

#[tokio::test]
async fn http_errors_surface_status_and_body_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jogo/list"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::with_config(server.uri(), fast_retry_config()).unwrap();
    let err = client.list_games().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("maintenance window"));
}
