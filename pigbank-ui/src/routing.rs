//! Routing
//!
//! Binds the `pigbank` route table to the browser location. The base path is
//! fixed at build time through `PIGBANK_BASE_URL`.

use std::rc::Rc;

use pigbank::router::{app_routes, History, RouteMatch, RouteResult, Router};

/// Path prefix the app is served under
pub const BASE_URL: &str = match option_env!("PIGBANK_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Route resolution shared through Leptos context
#[derive(Clone)]
pub struct Routing {
    router: Rc<Router>,
}

impl Routing {
    pub fn new(base: &str) -> RouteResult<Self> {
        let router = Router::new(app_routes()?, History::new(base));
        Ok(Self {
            router: Rc::new(router),
        })
    }

    /// Resolve a browser pathname
    pub fn resolve(&self, pathname: &str) -> RouteResult<RouteMatch> {
        self.router.resolve(pathname)
    }

    /// Link target for a route path
    pub fn href(&self, path: &str) -> String {
        self.router.history().href(path)
    }

    /// Link target for a named route
    pub fn href_named(&self, name: &str) -> RouteResult<String> {
        let route = self.router.table().resolve_by_name(name)?;
        Ok(self.href(&route.path))
    }
}
