use crate::article::{Article, ArticlePayload};
use crate::error::{SeedFetchError, SyncError};

/// REST client for the articles backend.
///
/// One instance per backend; cheap to clone, the underlying connection pool
/// is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    seed_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, seed_url: String, timeout: std::time::Duration) -> Self {
        let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
        Self {
            http,
            base_url,
            seed_url,
        }
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn article_url(&self, article_id: i64) -> String {
        format!("{}/articles/{}", self.base_url, article_id)
    }

    #[tracing::instrument(name = "Fetching every article from the backend", skip_all)]
    pub async fn list(&self) -> Result<Vec<Article>, SyncError> {
        let rows = self
            .http
            .get(self.articles_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Article>>()
            .await?;
        tracing::debug!("The backend returned {} articles", rows.len());
        Ok(rows)
    }

    #[tracing::instrument(
        name = "Submitting a new article to the backend",
        skip_all,
        fields(title = tracing::field::Empty)
    )]
    pub async fn create(&self, article: &Article) -> Result<(), SyncError> {
        if let Some(title) = &article.title {
            tracing::Span::current().record("title", &tracing::field::display(title));
        }

        self.http
            .post(self.articles_url())
            .json(&ArticlePayload::from(article))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[tracing::instrument(
        name = "Updating an article on the backend",
        skip_all,
        fields(article_id = tracing::field::Empty)
    )]
    pub async fn update(&self, article: &Article) -> Result<(), SyncError> {
        let article_id = article.article_id.ok_or(SyncError::MissingId)?;
        tracing::Span::current().record("article_id", &tracing::field::display(article_id));

        self.http
            .put(self.article_url(article_id))
            .json(&ArticlePayload::from(article))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[tracing::instrument(
        name = "Deleting an article from the backend",
        skip_all,
        fields(article_id = tracing::field::Empty)
    )]
    pub async fn delete(&self, article: &Article) -> Result<(), SyncError> {
        let article_id = article.article_id.ok_or(SyncError::MissingId)?;
        tracing::Span::current().record("article_id", &tracing::field::display(article_id));

        self.http
            .delete(self.article_url(article_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Deletes every row in the backend's articles table.
    #[tracing::instrument(name = "Truncating the articles table", skip_all)]
    pub async fn truncate(&self) -> Result<(), SyncError> {
        self.http
            .delete(self.articles_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching the seed dataset", skip_all)]
    pub async fn fetch_seed(&self) -> Result<Vec<Article>, SeedFetchError> {
        let rows = self
            .http
            .get(&self.seed_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(SeedFetchError)?
            .json::<Vec<Article>>()
            .await
            .map_err(SeedFetchError)?;
        Ok(rows)
    }
}
