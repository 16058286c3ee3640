//! Pigbank Router
//!
//! Client-side routing for the single-page app:
//!
//! - **table**: ordered, validated path -> view mapping
//! - **history**: history-mode addressing under a base path
//! - **routes**: the application's route declarations
//! - **error**: configuration and NotFound errors
//!
//! [`Router`] ties the pieces together and tracks the current location.
//!
//! # Example
//!
//! ```rust
//! use pigbank::router::{app_routes, History, Router};
//! use pigbank::ViewId;
//!
//! let mut router = Router::new(app_routes().unwrap(), History::new("/pigbank"));
//!
//! let matched = router.push("/pigbank/login").unwrap();
//! assert_eq!(matched.view, ViewId::Login);
//!
//! let matched = router.push_named("ExpenseList").unwrap();
//! assert_eq!(matched.location, "/pigbank/expenseList");
//! ```

pub mod error;
pub mod history;
pub mod routes;
pub mod table;

pub use error::{RouteError, RouteResult};
pub use history::{History, HistoryMode};
pub use routes::app_routes;
pub use table::{Route, RouteTable, RouteTableBuilder};

use serde::Serialize;

use crate::views::ViewId;

/// Matched-route context handed to the rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Document location that was requested
    pub location: String,
    /// Path of the route that matched
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub view: ViewId,
}

/// Navigator over a route table in history mode
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    history: History,
    entries: Vec<String>,
    current: Option<RouteMatch>,
}

impl Router {
    pub fn new(table: RouteTable, history: History) -> Self {
        Self {
            table,
            history,
            entries: Vec::new(),
            current: None,
        }
    }

    /// Resolve a document location without navigating
    pub fn resolve(&self, location: &str) -> RouteResult<RouteMatch> {
        let path = self.history.strip_base(location)?;
        let route = self.table.resolve(&path)?;

        Ok(RouteMatch {
            location: location.to_string(),
            path: route.path.clone(),
            name: route.name.clone(),
            view: route.view,
        })
    }

    /// Navigate to a document location.
    ///
    /// An unmatched location is still recorded as a history entry; it leaves
    /// no current route, so nothing renders.
    pub fn push(&mut self, location: &str) -> RouteResult<RouteMatch> {
        self.entries.push(location.to_string());
        self.settle(location)
    }

    /// Navigate to a named route
    pub fn push_named(&mut self, name: &str) -> RouteResult<RouteMatch> {
        let route = self.table.resolve_by_name(name)?;
        let location = self.history.href(&route.path);
        self.push(&location)
    }

    /// Step back one history entry. `None` when there is nothing to go back to.
    pub fn back(&mut self) -> Option<RouteResult<RouteMatch>> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        let location = self.entries.last()?.clone();
        Some(self.settle(&location))
    }

    /// Route currently rendered, if any
    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    /// Location of the latest history entry
    pub fn location(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn settle(&mut self, location: &str) -> RouteResult<RouteMatch> {
        match self.resolve(location) {
            Ok(matched) => {
                tracing::debug!(location, view = %matched.view, "Navigation resolved");
                self.current = Some(matched.clone());
                Ok(matched)
            }
            Err(e) => {
                tracing::warn!(location, error = %e, "No match found for location");
                self.current = None;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(base: &str) -> Router {
        Router::new(app_routes().unwrap(), History::new(base))
    }

    #[test]
    fn test_push_updates_current() {
        let mut router = router("/");
        assert!(router.current().is_none());

        let matched = router.push("/login").unwrap();
        assert_eq!(matched.view, ViewId::Login);
        assert_eq!(router.current(), Some(&matched));
        assert_eq!(router.location(), Some("/login"));

        router.push("/expenseList").unwrap();
        assert_eq!(router.current().unwrap().view, ViewId::ExpenseList);
        assert_eq!(router.current().unwrap().name.as_deref(), Some("ExpenseList"));
    }

    #[test]
    fn test_unmatched_push_clears_current() {
        let mut router = router("/");
        router.push("/home").unwrap();

        let err = router.push("/doesnotexist").unwrap_err();
        assert!(err.is_not_found());
        assert!(router.current().is_none());
        assert_eq!(router.location(), Some("/doesnotexist"));
    }

    #[test]
    fn test_push_named_uses_base() {
        let mut router = router("/pigbank");

        let matched = router.push_named("PigIntro").unwrap();
        assert_eq!(matched.location, "/pigbank");
        assert_eq!(matched.view, ViewId::PigIntro);

        let matched = router.push_named("ExpenseList").unwrap();
        assert_eq!(matched.location, "/pigbank/expenseList");

        assert!(router.push_named("Home").is_err());
        // A failed name lookup is not a navigation
        assert_eq!(router.location(), Some("/pigbank/expenseList"));
    }

    #[test]
    fn test_location_outside_base() {
        let mut router = router("/pigbank");

        assert!(matches!(
            router.push("/login"),
            Err(RouteError::OutsideBase { .. })
        ));
        assert_eq!(router.push("/pigbank/login").unwrap().view, ViewId::Login);
    }

    #[test]
    fn test_back() {
        let mut router = router("/");
        assert!(router.back().is_none());

        router.push("/").unwrap();
        router.push("/login").unwrap();
        router.push("/nowhere").unwrap_err();

        let previous = router.back().unwrap().unwrap();
        assert_eq!(previous.view, ViewId::Login);

        let previous = router.back().unwrap().unwrap();
        assert_eq!(previous.view, ViewId::PigIntro);
        assert!(router.back().is_none());
    }
}
