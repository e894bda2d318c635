use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One blog article, wrapped from a backend row or a seed item.
///
/// Known keys land in the typed fields, everything else is kept verbatim in
/// [`Article::extra`]. No field is required: a record missing every expected
/// column still wraps. A known key holding a value of the wrong type is
/// rejected at construction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Article {
    /// Server-assigned identifier. Absent on seed items; never submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "authorUrl", default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Markdown as supplied; the renderer rewrites it to HTML in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Publication timestamp, verbatim from the source. `None` marks a draft.
    #[serde(rename = "publishedOn", default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whole days since publication. Recomputed on every render, never persisted.
    #[serde(skip)]
    pub days_ago: Option<i64>,
    /// Human-readable publish status. Recomputed on every render, never persisted.
    #[serde(skip)]
    pub publish_status: Option<String>,

    /// Keys the source supplied that this struct does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Wraps a raw record. Every key of the input stays exposed with an
    /// unchanged value. Rejection is limited to known keys holding a value
    /// of the wrong type.
    pub fn from_value(value: Value) -> serde_json::Result<Article> {
        serde_json::from_value(value)
    }

    /// An article that has never been published. Absence of the timestamp is
    /// the only draft flag there is.
    pub fn is_draft(&self) -> bool {
        self.published_on.is_none()
    }

    /// The parsed publication timestamp. `None` for drafts and for stored
    /// values that are not a recognizable date.
    pub fn published_on_date(&self) -> Option<DateTime<Utc>> {
        parse_published_on(self.published_on.as_deref()?)
    }
}

/// The fixed field subset submitted on create and update. The identifier is
/// server-assigned and never part of it; neither are the derived fields.
#[derive(Serialize, Debug)]
pub struct ArticlePayload<'a> {
    pub author: Option<&'a str>,
    #[serde(rename = "authorUrl")]
    pub author_url: Option<&'a str>,
    pub body: Option<&'a str>,
    pub category: Option<&'a str>,
    #[serde(rename = "publishedOn")]
    pub published_on: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl<'a> From<&'a Article> for ArticlePayload<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            author: article.author.as_deref(),
            author_url: article.author_url.as_deref(),
            body: article.body.as_deref(),
            category: article.category.as_deref(),
            published_on: article.published_on.as_deref(),
            title: article.title.as_deref(),
        }
    }
}

// Backend rows carry RFC 3339-ish timestamps; seed datasets carry whatever a
// JS `new Date(..)` used to swallow. Try the shapes in decreasing order of
// strictness.
fn parse_published_on(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(raw) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&date_time));
    }
    for format in ["%Y-%m-%d", "%a %b %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}
