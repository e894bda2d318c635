use blog_client::article::Article;
use blog_client::bootstrap::{self, FetchOutcome};
use blog_client::client::ApiClient;
use blog_client::configuration::{env_conf, get_env};
use blog_client::render::Renderer;
use blog_client::store::Store;
use blog_client::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::TracingSubscriber::new("blog-client").build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    let conf = env_conf();

    tracing::info!("APP_ENVIRONMENT={}", get_env().as_str());

    let timeout = conf.backend.timeout();
    let client = ApiClient::new(conf.backend.base_url, conf.backend.seed_url, timeout);

    let mut store = Store::new();
    match bootstrap::fetch_all(&client, &mut store).await? {
        FetchOutcome::Loaded { count } => {
            tracing::info!("Loaded {} articles from the backend", count);
        }
        FetchOutcome::Seeded {
            submitted,
            failed,
            loaded,
        } => {
            tracing::info!(
                "Seeded the backend: {} submitted, {} failed, {} loaded",
                submitted,
                failed,
                loaded
            );
        }
    }

    let renderer = Renderer::new(article_template);
    for article in store.iter_mut() {
        println!("{}", renderer.to_html(article));
    }

    Ok(())
}

fn article_template(article: &Article) -> String {
    format!(
        r#"<article>
  <header>
    <a href="{author_url}"><h3 class="byline">{author}</h3></a>
    <h2>{title}</h2>
    <p>{status}</p>
    <p>{category}</p>
  </header>
  <section class="article-body">{body}</section>
</article>"#,
        author_url = article.author_url.as_deref().unwrap_or("#"),
        author = article.author.as_deref().unwrap_or(""),
        title = article.title.as_deref().unwrap_or(""),
        status = article.publish_status.as_deref().unwrap_or(""),
        category = article.category.as_deref().unwrap_or(""),
        body = article.body.as_deref().unwrap_or(""),
    )
}
