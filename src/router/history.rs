//! History-mode addressing
//!
//! Routes are matched against the real document location (no `#` prefix),
//! anchored at a base path the application is served under.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::{RouteError, RouteResult};

/// How locations are mapped onto route paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Clean URLs: `/base/login`
    #[default]
    History,
    /// Fragment URLs: `/base/#/login`. Recognized in configuration, not supported.
    Hash,
}

/// History-mode location handling for a given base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    base: String,
}

impl History {
    /// Create a history anchored at `base`.
    ///
    /// The base is normalized to start with `/` and to carry no trailing
    /// slash (except the root base `/` itself).
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Strip the base from a document location, giving the route path
    /// (query and fragment are kept).
    pub fn strip_base<'a>(&self, location: &'a str) -> RouteResult<Cow<'a, str>> {
        let outside = || RouteError::OutsideBase {
            location: location.to_string(),
            base: self.base.clone(),
        };

        if self.base == "/" {
            return if location.starts_with('/') {
                Ok(Cow::Borrowed(location))
            } else {
                Err(outside())
            };
        }

        let rest = location.strip_prefix(self.base.as_str()).ok_or_else(outside)?;
        if rest.is_empty() {
            Ok(Cow::Borrowed("/"))
        } else if rest.starts_with('/') {
            Ok(Cow::Borrowed(rest))
        } else if rest.starts_with('?') || rest.starts_with('#') {
            Ok(Cow::Owned(format!("/{rest}")))
        } else {
            // `/pigbank` must not claim `/pigbankers`
            Err(outside())
        }
    }

    /// Full document location for a route path
    pub fn href(&self, path: &str) -> String {
        if self.base == "/" {
            return path.to_string();
        }
        if path == "/" {
            return self.base.clone();
        }
        format!("{}{}", self.base, path)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
