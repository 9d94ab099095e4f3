// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp-directory environments and page fixtures for template tests

#![allow(dead_code)]

use serde_json::{json, Value as JsonValue};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>{{ project.page.title}}</title>
	<meta charset="utf-8" >
	<meta name="version" content="{{     version }}">
</head>
<body>
	<h1>{{ project.blog.title }}</h1>
	{{project.blog.content}}
</body>
</html>"#;

pub const TRIPLE_BRACE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>{{{ project.page.title}}}</title>
	<meta charset="utf-8" >
	<meta name="version" content="{{{     version }}}">
</head>
<body>
	<h1>{{{ project.blog.title }}}</h1>
	{{{project.blog.content}}}
</body>
</html>"#;

pub const FIRST_POST: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>Hello page</title>
	<meta charset="utf-8" >
	<meta name="version" content="0.0.1">
</head>
<body>
	<h1>First blog post</h1>
	<p>Lorem ipsum</p>
</body>
</html>"#;

pub const FIRST_POST_WITHOUT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title></title>
	<meta charset="utf-8" >
	<meta name="version" content="">
</head>
<body>
	<h1>First blog post</h1>
	<p>Lorem ipsum</p>
</body>
</html>"#;

pub const SECOND_POST: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>Hello page</title>
	<meta charset="utf-8" >
	<meta name="version" content="0.0.1">
</head>
<body>
	<h1>Second blog post</h1>
	<p>Lorem ipsum lorem ipsum</p>
</body>
</html>"#;

pub fn full_data() -> JsonValue {
    json!({
        "version": "0.0.1",
        "project": {
            "page": {"title": "Hello page"},
            "blog": {"title": "First blog post", "content": "<p>Lorem ipsum</p>"}
        }
    })
}

pub fn blog_only_data() -> JsonValue {
    json!({
        "project": {
            "blog": {"title": "First blog post", "content": "<p>Lorem ipsum</p>"}
        }
    })
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub async fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .expect("Failed to create fixture directory");
        }
        fs::write(&path, content)
            .await
            .expect("Failed to write fixture file");
        path
    }

    pub async fn create_json(&self, name: &str, value: &JsonValue) -> PathBuf {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.create_file(name, &content).await
    }

    pub async fn read_file(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .await
            .expect("Failed to read output file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());

        let file = env.create_file("templates/page.html", "x").await;
        assert!(file.exists());
        assert_eq!(env.read_file(&file).await, "x");
    }
}
