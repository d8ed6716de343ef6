use actix_web::web::Bytes;

const TEMPLATE: &str = include_str!("./index.html");

/// The home page body, rendered once at startup and shared by every worker.
///
/// Held as [`Bytes`] so each response clones a reference count, not the page.
#[derive(Debug, Clone)]
pub struct HomePage(Bytes);

impl HomePage {
    #[must_use]
    pub fn render(title: &str) -> Self {
        Self(Bytes::from(
            TEMPLATE.replace("{{title}}", &escape_html(title)),
        ))
    }

    #[must_use]
    pub fn body(&self) -> Bytes {
        self.0.clone()
    }

    /// The page as text. Always valid UTF-8 since it is built from a `String`.
    #[must_use]
    pub fn html(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
