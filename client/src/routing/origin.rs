//! Origin location and redirect intent.
//!
//! The guard records where a visitor was headed as an [`Origin`], wraps it in
//! a [`RedirectIntent`] and sends them to login with the origin encoded in
//! the `from` query parameter. Login decodes it back with
//! [`Origin::from_query`] once sign-in completes.

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use super::{AppRoute, FROM_PARAM};

/// Path a visitor attempted before being redirected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    pathname: String,
    search: String,
    hash: String,
}

impl Origin {
    /// Build an origin from router location parts. `search` may carry a
    /// leading `?`.
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        let search = search.into();
        let search = search.strip_prefix('?').map(str::to_owned).unwrap_or(search);
        Self { pathname: pathname.into(), search, hash: String::new() }
    }

    /// Attach a fragment. `hash` may carry a leading `#`.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        self.hash = hash.strip_prefix('#').map(str::to_owned).unwrap_or(hash);
        self
    }

    pub fn root() -> Self {
        Self::new(AppRoute::Home.path(), "")
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Path plus query and fragment, suitable for navigation.
    pub fn href(&self) -> String {
        let mut href = self.pathname.clone();
        if !self.search.is_empty() {
            href.push('?');
            href.push_str(&self.search);
        }
        if !self.hash.is_empty() {
            href.push('#');
            href.push_str(&self.hash);
        }
        href
    }

    /// Resolve the decoded `from` parameter read on the login page.
    ///
    /// Missing values, anything that is not a local absolute path, and the
    /// login page itself all resolve to the root path.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| is_local_path(raw)) else {
            return Self::root();
        };
        if AppRoute::from_path(raw) == Some(AppRoute::Login) {
            return Self::root();
        }
        let (rest, hash) = raw.split_once('#').unwrap_or((raw, ""));
        let (pathname, search) = rest.split_once('?').unwrap_or((rest, ""));
        Self::new(pathname, search).with_hash(hash)
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::root()
    }
}

// Browsers drop tab, CR and LF while parsing, so `/\t/host` would resolve as
// `//host`. Any control or whitespace character disqualifies the value.
fn is_local_path(raw: &str) -> bool {
    raw.starts_with('/')
        && !raw.starts_with("//")
        && !raw.contains('\\')
        && !raw.chars().any(|c| c.is_ascii_control() || c.is_whitespace())
}

/// Typed redirect: send the visitor to `target`, remembering `origin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectIntent {
    pub target: AppRoute,
    pub origin: Origin,
}

impl RedirectIntent {
    pub fn new(target: AppRoute, origin: Origin) -> Self {
        Self { target, origin }
    }

    /// Target URL with the origin attached as `?from=`.
    pub fn href(&self) -> String {
        format!("{}?{FROM_PARAM}={}", self.target.path(), urlencoding::encode(&self.origin.href()))
    }
}
