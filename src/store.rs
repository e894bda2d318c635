use crate::article::Article;
use chrono::{DateTime, Utc};

/// The in-memory collection of loaded articles, newest first.
///
/// An explicit store rather than process-wide state: callers own one and pass
/// it by reference to the flows that fill it.
#[derive(Debug, Default)]
pub struct Store {
    articles: Vec<Article>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts `rows` descending by publication timestamp and appends them, in
    /// that order, to the collection.
    ///
    /// Loading never clears what is already there: loading the same rows
    /// twice keeps them twice. Call [`Store::clear`] first for a rebuild.
    pub fn load(&mut self, mut rows: Vec<Article>) {
        // Stable sort; rows without a parseable timestamp go last.
        rows.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        self.articles.extend(rows);
    }

    /// Removes the article with the given server-assigned id, if present.
    ///
    /// Local removal only. Deleting a record remotely does not touch any
    /// store, and removing it here does not touch the backend.
    pub fn remove(&mut self, article_id: i64) -> Option<Article> {
        let position = self
            .articles
            .iter()
            .position(|article| article.article_id == Some(article_id))?;
        Some(self.articles.remove(position))
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Article> {
        self.articles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }
}

fn sort_key(article: &Article) -> Option<DateTime<Utc>> {
    // `None` orders below every timestamp, so drafts and unparseable dates
    // end up as the oldest entries.
    article.published_on_date()
}
