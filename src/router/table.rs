//! Route Table
//!
//! Ordered, immutable mapping from URL path to page view. Registration goes
//! through [`RouteTableBuilder`], which validates every entry so a bad
//! configuration fails at startup instead of at navigation time.

use serde::Serialize;
use std::collections::HashMap;

use super::error::{RouteError, RouteResult};
use crate::views::ViewId;

/// A single path -> view association
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Literal URL path, e.g. `/login`
    pub path: String,
    /// Optional name for programmatic navigation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// View rendered when the path is active
    pub view: ViewId,
}

impl Route {
    /// Create an unnamed route
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: None,
            view,
        }
    }

    /// Attach a name to the route
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Collects and validates routes before freezing them into a [`RouteTable`]
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// Fails when the path is malformed, or when the path or name is already
    /// taken by an earlier registration.
    pub fn register(
        &mut self,
        path: &str,
        view: ViewId,
        name: Option<&str>,
    ) -> RouteResult<&mut Self> {
        let route = match name {
            Some(name) => Route::new(path, view).named(name),
            None => Route::new(path, view),
        };
        self.add(route)?;
        Ok(self)
    }

    /// Register a prebuilt route
    pub fn add(&mut self, route: Route) -> RouteResult<()> {
        validate_path(&route.path)?;

        if self.by_path.contains_key(&route.path) {
            return Err(RouteError::DuplicatePath(route.path));
        }
        if let Some(name) = &route.name {
            if self.by_name.contains_key(name) {
                return Err(RouteError::DuplicateName(name.clone()));
            }
        }

        let idx = self.routes.len();
        self.by_path.insert(route.path.clone(), idx);
        if let Some(name) = &route.name {
            self.by_name.insert(name.clone(), idx);
        }
        self.routes.push(route);
        Ok(())
    }

    /// Freeze the registered routes
    pub fn build(self) -> RouteTable {
        tracing::debug!(routes = self.routes.len(), "Route table built");
        RouteTable {
            routes: self.routes,
            by_path: self.by_path,
            by_name: self.by_name,
        }
    }
}

/// Immutable route table, in declaration order
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Build a table from routes in declaration order
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> RouteResult<Self> {
        let mut builder = RouteTableBuilder::new();
        for route in routes {
            builder.add(route)?;
        }
        Ok(builder.build())
    }

    /// Exact-match lookup of a route path.
    ///
    /// Query string and fragment are ignored, percent-escapes are decoded and
    /// a single trailing slash is tolerated. Matching is case sensitive.
    pub fn resolve(&self, path: &str) -> RouteResult<&Route> {
        lookup_key(path)
            .and_then(|key| self.by_path.get(&key).copied())
            .map(|idx| &self.routes[idx])
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Lookup by route name
    pub fn resolve_by_name(&self, name: &str) -> RouteResult<&Route> {
        self.by_name
            .get(name)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| RouteError::NameNotFound(name.to_string()))
    }

    /// Routes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn validate_path(path: &str) -> RouteResult<()> {
    let reason = if path.is_empty() {
        Some("must not be empty")
    } else if !path.starts_with('/') {
        Some("must start with '/'")
    } else if path.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if path.contains(|c: char| c == '?' || c == '#') {
        Some("must not contain a query or fragment")
    } else if path.contains("//") {
        Some("must not contain empty segments")
    } else if path.contains(|c: char| c == ':' || c == '*') {
        Some("dynamic segments are not supported")
    } else if path.contains('%') {
        Some("must not contain percent-escapes")
    } else if path.len() > 1 && path.ends_with('/') {
        Some("must not end with '/'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RouteError::MalformedPath {
            path: path.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Normalize a requested path into the form routes are keyed by
fn lookup_key(path: &str) -> Option<String> {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let decoded = urlencoding::decode(&path[..end]).ok()?;
    let trimmed = match decoded.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => &decoded[..],
    };
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RouteTable {
        let mut builder = RouteTable::builder();
        builder
            .register("/", ViewId::PigIntro, Some("PigIntro"))
            .unwrap()
            .register("/login", ViewId::Login, None)
            .unwrap()
            .register("/expenseList", ViewId::ExpenseList, Some("ExpenseList"))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_resolve_exact_paths() {
        let table = sample_table();

        assert_eq!(table.resolve("/").unwrap().view, ViewId::PigIntro);
        assert_eq!(table.resolve("/login").unwrap().view, ViewId::Login);
        assert_eq!(table.resolve("/expenseList").unwrap().view, ViewId::ExpenseList);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = sample_table();

        let first = table.resolve("/login").unwrap();
        let second = table.resolve("/login").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = sample_table();

        assert_eq!(
            table.resolve("/doesnotexist"),
            Err(RouteError::NotFound("/doesnotexist".to_string()))
        );
        assert!(table.resolve("").is_err());
        assert!(table.resolve("login").is_err());
    }

    #[test]
    fn test_resolve_normalization() {
        let table = sample_table();

        assert_eq!(table.resolve("/login?next=/home").unwrap().path, "/login");
        assert_eq!(table.resolve("/login#form").unwrap().path, "/login");
        assert_eq!(table.resolve("/login/").unwrap().path, "/login");
        assert_eq!(table.resolve("/%6Cogin").unwrap().path, "/login");
        assert_eq!(table.resolve("/?ref=mail").unwrap().path, "/");

        // Case sensitive, one trailing slash only
        assert!(table.resolve("/Login").is_err());
        assert!(table.resolve("/login//").is_err());
        assert!(table.resolve("//").is_err());
        assert!(table.resolve("//?ref=mail").is_err());
    }

    #[test]
    fn test_resolve_by_name() {
        let table = sample_table();

        assert_eq!(table.resolve_by_name("PigIntro").unwrap().path, "/");
        assert_eq!(table.resolve_by_name("ExpenseList").unwrap().path, "/expenseList");
        assert_eq!(
            table.resolve_by_name("Login"),
            Err(RouteError::NameNotFound("Login".to_string()))
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut builder = RouteTable::builder();
        builder.register("/home", ViewId::Home, None).unwrap();

        let err = builder.register("/home", ViewId::Login, None).unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/home".to_string()));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::from_routes([
            Route::new("/", ViewId::PigIntro).named("Start"),
            Route::new("/home", ViewId::Home).named("Start"),
        ])
        .unwrap_err();

        assert_eq!(err, RouteError::DuplicateName("Start".to_string()));
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for path in ["", "login", "/log in", "/login?x=1", "/a//b", "/users/:id", "/docs/*", "/home/", "/a%20b"] {
            let mut builder = RouteTable::builder();
            let result = builder.register(path, ViewId::Home, None);
            assert!(
                matches!(result, Err(RouteError::MalformedPath { .. })),
                "expected {path:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_registered_paths_resolve_to_themselves() {
        let mut builder = RouteTable::builder();
        builder.register("/a b", ViewId::Home, None).unwrap_err();
        builder.register("/a%20b", ViewId::Home, None).unwrap_err();
        builder.register("/savings", ViewId::Home, None).unwrap();
        let table = builder.build();

        for route in table.iter() {
            assert_eq!(table.resolve(&route.path).unwrap(), route);
        }
        assert!(table.resolve("/a%20b").is_err());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = sample_table();
        let paths: Vec<_> = table.iter().map(|r| r.path.as_str()).collect();

        assert_eq!(paths, ["/", "/login", "/expenseList"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}
