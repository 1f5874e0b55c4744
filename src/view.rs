//! Renderable views.
//!
//! A message body or attachment content is an opaque value that renders to
//! bytes plus a content type. The two built-in views cover literal strings
//! and in-memory file data; applications can implement [`Renderable`] for
//! their own view types (template output, generated documents, etc).

use std::io;

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";

/// The result of rendering a view: a byte payload and an optional content
/// type string (possibly carrying parameters, e.g. `text/plain; charset=utf-8`).
#[derive(Debug, Clone)]
pub struct RenderedContent {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl RenderedContent {
    pub fn new(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self { body, content_type }
    }

    /// The media type with any parameters stripped, trimmed and lowercased.
    /// Returns `None` when no usable type was supplied.
    pub fn clean_content_type(&self) -> Option<String> {
        clean_content_type(self.content_type.as_deref())
    }
}

/// A value that can be rendered into email content.
pub trait Renderable: Send + Sync {
    fn render(&self) -> io::Result<RenderedContent>;
}

/// A literal string view with an optional content type.
#[derive(Debug, Clone)]
pub struct StringView {
    content: String,
    content_type: Option<String>,
}

impl StringView {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content).with_content_type(TEXT_PLAIN)
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self::new(content).with_content_type(TEXT_HTML)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl Renderable for StringView {
    fn render(&self) -> io::Result<RenderedContent> {
        Ok(RenderedContent::new(
            self.content.clone().into_bytes(),
            self.content_type.clone(),
        ))
    }
}

/// In-memory file data with a name and content type, typically used for
/// attachments.
#[derive(Debug, Clone)]
pub struct FileView {
    file_name: String,
    content: Vec<u8>,
    content_type: String,
}

impl FileView {
    pub fn new(
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            content_type: content_type.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Renderable for FileView {
    fn render(&self) -> io::Result<RenderedContent> {
        Ok(RenderedContent::new(
            self.content.clone(),
            Some(self.content_type.clone()),
        ))
    }
}

pub(crate) fn clean_content_type(raw: Option<&str>) -> Option<String> {
    let media_type = raw?.split(';').next()?.trim().to_ascii_lowercase();
    if media_type.is_empty() {
        None
    } else {
        Some(media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_view_renders_content_and_type() {
        let rendered = StringView::html("<h1>Hi</h1>").render().unwrap();
        assert_eq!(rendered.body, b"<h1>Hi</h1>");
        assert_eq!(rendered.content_type.as_deref(), Some(TEXT_HTML));
    }

    #[test]
    fn string_view_defaults_to_no_content_type() {
        let rendered = StringView::new("Body").render().unwrap();
        assert_eq!(rendered.body, b"Body");
        assert!(rendered.content_type.is_none());
    }

    #[test]
    fn file_view_renders_bytes() {
        let rendered = FileView::new("file.txt", vec![0u8, 1, 2], TEXT_PLAIN)
            .render()
            .unwrap();
        assert_eq!(rendered.body, vec![0, 1, 2]);
        assert_eq!(rendered.content_type.as_deref(), Some(TEXT_PLAIN));
    }

    #[test]
    fn clean_content_type_strips_parameters() {
        assert_eq!(
            clean_content_type(Some("text/plain; charset=utf-8")).as_deref(),
            Some("text/plain")
        );
        assert_eq!(
            clean_content_type(Some(" Text/HTML ")).as_deref(),
            Some("text/html")
        );
    }

    #[test]
    fn clean_content_type_treats_blank_as_none() {
        assert!(clean_content_type(None).is_none());
        assert!(clean_content_type(Some("")).is_none());
        assert!(clean_content_type(Some("   ")).is_none());
    }
}
