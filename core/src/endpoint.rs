//! Endpoint URL construction.
//!
//! Segments are joined with `/` in order: base, optional version, endpoint,
//! then every extra segment. Segments are not percent-encoded; callers pass
//! already-safe values (document numbers, slugs, folder names).

/// Joins a fixed base address with per-call endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    version: Option<String>,
    suffix: Option<&'static str>,
}

impl UrlBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            version: None,
            suffix: None,
        }
    }

    /// Insert a version segment between the base and every endpoint.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Append a literal suffix (e.g. `.json`) to every built URL.
    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build<S: AsRef<str>>(&self, endpoint: &str, segments: &[S]) -> String {
        let mut url = self.base_url.clone();
        if let Some(version) = &self.version {
            url.push('/');
            url.push_str(version);
        }
        url.push('/');
        url.push_str(endpoint);
        for segment in segments {
            url.push('/');
            url.push_str(segment.as_ref());
        }
        if let Some(suffix) = self.suffix {
            url.push_str(suffix);
        }
        url
    }
}
