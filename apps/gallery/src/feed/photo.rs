use serde::Serialize;

/// Where exhibitor photos are served from, and which file stands in for a missing one.
#[derive(Debug, Clone)]
pub struct PhotoResolver {
    prefix: String,
    placeholder: String,
}

/// Photo URLs for one card. The view layer swaps to `fallback_url` if `url` fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoUrls {
    pub url: String,
    pub fallback_url: String,
}

impl PhotoResolver {
    pub fn new(prefix: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Last path segment of `path`, splitting on both `/` and `\`.
    /// Empty paths and paths ending in a separator resolve to the placeholder name.
    pub fn basename<'a>(&'a self, path: &'a str) -> &'a str {
        match path.rsplit(['/', '\\']).next() {
            Some(name) if !name.is_empty() => name,
            _ => &self.placeholder,
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.prefix, self.basename(path))
    }

    pub fn placeholder_url(&self) -> String {
        format!("{}{}", self.prefix, self.placeholder)
    }

    pub fn resolve(&self, path: &str) -> PhotoUrls {
        PhotoUrls {
            url: self.url_for(path),
            fallback_url: self.placeholder_url(),
        }
    }
}
