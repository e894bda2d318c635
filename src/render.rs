use crate::article::Article;
use chrono::Utc;

/// Anything that can turn an article into a finished block of HTML.
///
/// Closures work out of the box, so callers can pass a `format!` template
/// inline or plug in a real template engine behind the same seam.
pub trait Template {
    fn render(&self, article: &Article) -> String;
}

impl<F> Template for F
where
    F: Fn(&Article) -> String,
{
    fn render(&self, article: &Article) -> String {
        self(article)
    }
}

type MarkdownConvert = Box<dyn Fn(&str) -> String + Send + Sync>;

pub struct Renderer<T> {
    template: T,
    markdown: MarkdownConvert,
}

impl<T: Template> Renderer<T> {
    pub fn new(template: T) -> Self {
        Self {
            template,
            markdown: Box::new(|body| markdown_to_html(body)),
        }
    }

    /// Swaps the markdown stage out, for callers that bring their own
    /// converter or want none at all.
    pub fn with_markdown(
        template: T,
        markdown: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            template,
            markdown: Box::new(markdown),
        }
    }

    /// Fills in the article's presentation fields, converts its body from
    /// markdown, and renders it through the template.
    ///
    /// `days_ago` and `publish_status` are recomputed on every call; the
    /// body conversion happens in place, so rendering twice would convert
    /// twice.
    pub fn to_html(&self, article: &mut Article) -> String {
        article.days_ago = article
            .published_on_date()
            .map(|published| (Utc::now() - published).num_days());
        article.publish_status = Some(match article.days_ago {
            Some(days) => format!("published {} days ago", days),
            None => "(draft)".into(),
        });
        if let Some(body) = article.body.take() {
            article.body = Some((self.markdown)(&body));
        }
        self.template.render(article)
    }
}

pub fn markdown_to_html(input: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(input, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
