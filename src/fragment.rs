//! Fragment loading and page metadata.
//!
//! Header and footer content live in separate documents. A
//! [`FragmentLoader`] fetches them by site path; [`PageMetadata`] tells the
//! decorators which path to ask for.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use scraper::Html;

use crate::error::{Error, Result};
use crate::parser::selectors::META;

/// Source of auxiliary fragment documents.
pub trait FragmentLoader: Send + Sync {
    /// Load the fragment at a site path such as `/footer`.
    ///
    /// A missing or empty fragment is `None`.
    fn load(&self, path: &str) -> Option<String>;
}

/// Loads fragments from files under a root directory.
///
/// `/nav/footer` resolves to `<root>/nav/footer.plain.html`, falling back to
/// `<root>/nav/footer.html`.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader rooted at a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate files for a site path, in lookup order.
    ///
    /// Paths that try to leave the root yield no candidates.
    pub fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let relative = path.trim().trim_matches('/');
        if relative.is_empty() {
            return Vec::new();
        }
        let escapes = Path::new(relative)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Vec::new();
        }
        ["plain.html", "html"]
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", relative, ext)))
            .collect()
    }

    /// Read a fragment, reporting why it is unavailable.
    pub fn read(&self, path: &str) -> Result<String> {
        for candidate in self.candidates(path) {
            match std::fs::read_to_string(&candidate) {
                Ok(html) if !html.trim().is_empty() => return Ok(html),
                Ok(_) => return Err(Error::FragmentUnavailable(format!("{} is empty", path))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Err(Error::FragmentUnavailable(path.to_string()))
    }

    /// Read a fragment without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn read_async(&self, path: &str) -> Result<String> {
        for candidate in self.candidates(path) {
            match tokio::fs::read_to_string(&candidate).await {
                Ok(html) if !html.trim().is_empty() => return Ok(html),
                Ok(_) => return Err(Error::FragmentUnavailable(format!("{} is empty", path))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Err(Error::FragmentUnavailable(path.to_string()))
    }
}

impl FragmentLoader for DirectoryLoader {
    fn load(&self, path: &str) -> Option<String> {
        match self.read(path) {
            Ok(html) => Some(html),
            Err(e) => {
                log::warn!("fragment {}: {}", path, e);
                None
            }
        }
    }
}

/// Serves fragments from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    fragments: HashMap<String, String>,
}

impl MemoryLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment.
    pub fn with_fragment(mut self, path: &str, html: impl Into<String>) -> Self {
        self.insert(path, html);
        self
    }

    /// Add or replace a fragment.
    pub fn insert(&mut self, path: &str, html: impl Into<String>) {
        self.fragments.insert(normalize_path(path), html.into());
    }

    /// Get the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the loader holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FragmentLoader for MemoryLoader {
    fn load(&self, path: &str) -> Option<String> {
        let html = self
            .fragments
            .get(&normalize_path(path))
            .filter(|html| !html.trim().is_empty())
            .cloned();
        if html.is_none() {
            log::warn!("fragment {} unavailable", path);
        }
        html
    }
}

/// A loader that has nothing; header and footer blocks render nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFragments;

impl FragmentLoader for NoFragments {
    fn load(&self, path: &str) -> Option<String> {
        log::debug!("no fragment loader configured for {}", path);
        None
    }
}

fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim().trim_matches('/'))
}

/// Page-level `<meta>` values.
#[derive(Debug, Clone, Default)]
pub struct PageMetadata {
    values: HashMap<String, String>,
}

impl PageMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `<meta name|property=... content=...>` tags from a page.
    ///
    /// Repeated keys are joined with `", "`.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut metadata = Self::new();
        for meta in document.select(&META) {
            let el = meta.value();
            let Some(key) = el.attr("name").or_else(|| el.attr("property")) else {
                continue;
            };
            let Some(content) = el.attr("content") else {
                continue;
            };
            metadata.append(key, content);
        }
        metadata
    }

    /// Set a value, replacing any existing one.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.trim().to_lowercase(), value.into());
        self
    }

    fn append(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.trim().to_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Look up a value (case-insensitive key).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.trim().to_lowercase())
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Site path of the fragment configured under `key`, or `/<key>`.
    ///
    /// Absolute URLs are reduced to their path.
    pub fn fragment_path(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => url_path(value.trim()),
            None => format!("/{}", key.trim().trim_matches('/')),
        }
    }
}

/// The path component of a URL or site-relative reference.
fn url_path(value: &str) -> String {
    let without_origin = match value.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(i) => &rest[i..],
            None => "/",
        },
        None => value,
    };
    let end = without_origin.find(['?', '#']).unwrap_or(without_origin.len());
    let path = &without_origin[..end];
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
