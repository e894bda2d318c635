use crate::helpers::{article_row, seed_dataset, spawn_backend};
use blog_client::bootstrap::{fetch_all, FetchOutcome};
use blog_client::error::BootstrapError;
use blog_client::store::Store;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_populated_backend_loads_without_seeding() {
    // Arrange
    let app = spawn_backend().await;
    let rows = json!([
        article_row(1, "Older", "2020-01-01"),
        article_row(2, "Newer", "2021-01-01"),
    ]);
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/hacker-ipsum.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seed_dataset()))
        .expect(0)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.server)
        .await;
    let mut store = Store::new();

    // Act
    let outcome = fetch_all(&app.client, &mut store).await.unwrap();

    // Assert
    assert_eq!(outcome, FetchOutcome::Loaded { count: 2 });
    let titles: Vec<_> = store
        .iter()
        .map(|article| article.title.clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn an_empty_backend_is_seeded_then_reloaded() {
    // Arrange
    let app = spawn_backend().await;

    // The first fetch sees an empty table; the mock expires after one use
    // so the reload falls through to the populated one below.
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/hacker-ipsum.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seed_dataset()))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(201))
        .expect(3)
        .mount(&app.server)
        .await;
    let stored = json!([
        article_row(1, "Async in small doses", "Fri Jul 19 2013"),
        article_row(2, "Notes on a rewrite", "Sat Jul 20 2013"),
        article_row(3, "The case for plain text", "Sun Jul 21 2013"),
    ]);
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&app.server)
        .await;
    let mut store = Store::new();

    // Act
    let outcome = fetch_all(&app.client, &mut store).await.unwrap();

    // Assert
    assert_eq!(
        outcome,
        FetchOutcome::Seeded {
            submitted: 3,
            failed: 0,
            loaded: 3
        }
    );
    // Newest first, which also proves the JS-style date strings parsed.
    let titles: Vec<_> = store
        .iter()
        .map(|article| article.title.clone().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "The case for plain text",
            "Notes on a rewrite",
            "Async in small doses"
        ]
    );
}

#[tokio::test]
async fn seed_submission_failures_do_not_block_the_reload() {
    // Arrange
    let app = spawn_backend().await;

    // Two fetches total: the initial one and exactly one reload.
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/hacker-ipsum.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seed_dataset()))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&app.server)
        .await;
    let mut store = Store::new();

    // Act
    let outcome = fetch_all(&app.client, &mut store).await.unwrap();

    // Assert
    assert_eq!(
        outcome,
        FetchOutcome::Seeded {
            submitted: 3,
            failed: 3,
            loaded: 0
        }
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn a_failing_seed_fetch_aborts_the_bootstrap() {
    // Arrange
    let app = spawn_backend().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/hacker-ipsum.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.server)
        .await;
    let mut store = Store::new();

    // Act
    let outcome = fetch_all(&app.client, &mut store).await;

    // Assert
    assert!(matches!(outcome, Err(BootstrapError::Seed(_))));
    assert!(store.is_empty());
}

#[tokio::test]
async fn a_failing_first_fetch_aborts_immediately() {
    let app = spawn_backend().await;
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.server)
        .await;
    let mut store = Store::new();

    let outcome = fetch_all(&app.client, &mut store).await;

    assert!(matches!(outcome, Err(BootstrapError::Sync(_))));
    assert!(store.is_empty());
}
