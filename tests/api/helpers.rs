use blog_client::client::ApiClient;
use blog_client::telemetry::{init_global_default, TracingSubscriber};
use once_cell::sync::Lazy;
use serde_json::json;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = TracingSubscriber::new("test");

    if std::env::var("TEST_LOG").is_ok() {
        init_global_default(subscriber.build(std::io::stdout));
    } else {
        init_global_default(subscriber.build(std::io::sink));
    };
});

pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
}

/// Stands in for the articles backend; the client under test points at it
/// for both the REST routes and the seed dataset.
pub async fn spawn_backend() -> TestBackend {
    Lazy::force(&TRACING);

    let server = MockServer::start().await;
    let client = ApiClient::new(
        server.uri(),
        format!("{}/data/hacker-ipsum.json", server.uri()),
        std::time::Duration::from_secs(2),
    );

    TestBackend { server, client }
}

pub fn article_row(article_id: i64, title: &str, published_on: &str) -> serde_json::Value {
    json!({
        "article_id": article_id,
        "author": "Sam Hughes",
        "authorUrl": "http://example.com/sam",
        "body": "## A heading\n\nBody text.",
        "category": "rust",
        "publishedOn": published_on,
        "title": title,
    })
}

/// Three articles in the shape the seed file ships in: no ids, and the
/// date strings a JS `Date` used to produce.
pub fn seed_dataset() -> serde_json::Value {
    json!([
        {
            "title": "Async in small doses",
            "author": "Sam Hughes",
            "authorUrl": "http://example.com/sam",
            "body": "Lorem **ipsum** dolor.",
            "category": "rust",
            "publishedOn": "Fri Jul 19 2013"
        },
        {
            "title": "Notes on a rewrite",
            "author": "Renata Calle",
            "authorUrl": "http://example.com/renata",
            "body": "Sit amet, consectetur.",
            "category": "process",
            "publishedOn": "Sat Jul 20 2013"
        },
        {
            "title": "The case for plain text",
            "author": "Io Marsh",
            "authorUrl": "http://example.com/io",
            "body": "Adipiscing ~~elit~~.",
            "category": "tooling",
            "publishedOn": "Sun Jul 21 2013"
        }
    ])
}
