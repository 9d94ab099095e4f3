// ABOUTME: Layout splitter for documents with a ---fenced JSON header
// ABOUTME: Separates layout metadata from the document body

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::path::is_falsy;
use crate::store::FileStore;

const FENCE: &str = "---";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDocument {
    pub layout: Option<JsonValue>,
    pub body: String,
}

/// Split `text` into its layout header and body.
///
/// Text that does not start with `---` (ignoring leading whitespace) is
/// returned untouched with no layout. Otherwise the trimmed text is split: the
/// section between the first two fences is parsed as JSON (a falsy header
/// becomes `{}`) and everything after the second fence is the body, with any
/// later `---` kept intact. `name` identifies the document in
/// error messages.
pub fn split_text(name: &str, text: &str) -> Result<LayoutDocument> {
    let trimmed = text.trim();
    if !trimmed.starts_with(FENCE) {
        return Ok(LayoutDocument {
            layout: None,
            body: text.to_string(),
        });
    }

    let mut sections = trimmed.split(FENCE).skip(1);
    let header = sections.next().unwrap_or_default();
    let layout = match serde_json::from_str::<JsonValue>(header) {
        Ok(value) if is_falsy(&value) => JsonValue::Object(serde_json::Map::new()),
        Ok(value) => value,
        Err(e) => {
            return Err(TemplateError::FormatError {
                path: name.to_string(),
                message: format!("the layout must be formatted using JSON ({})", e),
            })
        }
    };
    let body = sections.collect::<Vec<_>>().join(FENCE);

    debug!("Found layout header in {}", name);
    Ok(LayoutDocument {
        layout: Some(layout),
        body,
    })
}

/// Read a document through `store` and split it
pub async fn split_document<S>(store: &S, path: &Path) -> Result<LayoutDocument>
where
    S: FileStore + ?Sized,
{
    let bytes = store.read(path).await?;
    let text = String::from_utf8_lossy(&bytes);
    split_text(&path.display().to_string(), &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryFileStore;
    use serde_json::json;

    #[test]
    fn test_split_with_layout() {
        let doc = split_text("page.html", "---\n{\"x\":1}\n---\nbody---text").unwrap();
        assert_eq!(doc.layout, Some(json!({"x": 1})));
        assert_eq!(doc.body, "\nbody---text");
    }

    #[test]
    fn test_split_without_layout() {
        let text = "  <h1>Title</h1>\n--- not a fence at start";
        let doc = split_text("page.html", text).unwrap();
        assert_eq!(doc.layout, None);
        assert_eq!(doc.body, text);
    }

    #[test]
    fn test_split_leading_whitespace_before_fence() {
        let doc = split_text("page.html", "\n  ---{\"title\": \"Home\"}---<p>hi</p>").unwrap();
        assert_eq!(doc.layout, Some(json!({"title": "Home"})));
        assert_eq!(doc.body, "<p>hi</p>");
    }

    #[test]
    fn test_split_null_layout_is_empty_object() {
        let doc = split_text("page.html", "---null---body").unwrap();
        assert_eq!(doc.layout, Some(json!({})));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_split_falsy_layout_is_empty_object() {
        for header in ["false", "0", "\"\""] {
            let doc = split_text("page.html", &format!("---{}---body", header)).unwrap();
            assert_eq!(doc.layout, Some(json!({})), "header {}", header);
        }
    }

    #[test]
    fn test_split_trims_trailing_whitespace_with_layout() {
        let doc = split_text("page.html", "---{\"x\":1}---\n<p>body</p>\n\n").unwrap();
        assert_eq!(doc.body, "\n<p>body</p>");

        // Without a layout the text is left alone
        let plain = split_text("page.html", "<p>body</p>\n").unwrap();
        assert_eq!(plain.body, "<p>body</p>\n");
    }

    #[test]
    fn test_split_header_without_body() {
        let doc = split_text("page.html", "---{\"a\": true}").unwrap();
        assert_eq!(doc.layout, Some(json!({"a": true})));
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_split_malformed_layout() {
        let err = split_text("blog/post.html", "---\ntitle: yaml\n---\nbody").unwrap_err();
        match err {
            TemplateError::FormatError { path, .. } => assert_eq!(path, "blog/post.html"),
            other => panic!("Expected format error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_split_document_through_store() {
        let store = MemoryFileStore::new()
            .with_file("post.html", "---{\"layout\": \"blog\"}---<article/>");

        let doc = split_document(&store, Path::new("post.html")).await.unwrap();
        assert_eq!(doc.layout, Some(json!({"layout": "blog"})));
        assert_eq!(doc.body, "<article/>");

        let missing = split_document(&store, Path::new("missing.html")).await;
        assert!(matches!(missing, Err(TemplateError::StoreError(_))));
    }
}
