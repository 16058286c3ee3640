//! Application plugins
//!
//! Capabilities are attached to the application instance before mount. The
//! router and the store are the two built-in plugins.

use super::error::{BootstrapError, BootstrapResult};
use crate::router::Router;
use crate::store::Store;

/// Capabilities collected from plugins, consumed by mount
#[derive(Debug, Default)]
pub struct AppContext {
    router: Option<Router>,
    store: Option<Store>,
}

impl AppContext {
    pub fn provide_router(&mut self, router: Router) -> BootstrapResult<()> {
        if self.router.is_some() {
            return Err(BootstrapError::DuplicatePlugin("router"));
        }
        self.router = Some(router);
        Ok(())
    }

    pub fn provide_store(&mut self, store: Store) -> BootstrapResult<()> {
        if self.store.is_some() {
            return Err(BootstrapError::DuplicatePlugin("store"));
        }
        self.store = Some(store);
        Ok(())
    }

    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Take out router and store, failing if either is missing
    pub(crate) fn into_parts(self) -> BootstrapResult<(Router, Store)> {
        let router = self.router.ok_or(BootstrapError::NotReady("router"))?;
        let store = self.store.ok_or(BootstrapError::NotReady("store"))?;
        Ok((router, store))
    }
}

/// Something that can be attached to an application
pub trait Plugin {
    /// Unique plugin name
    fn name(&self) -> &'static str;

    /// Register the plugin's capabilities
    fn install(self, ctx: &mut AppContext) -> BootstrapResult<()>;
}

impl Plugin for Router {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(self, ctx: &mut AppContext) -> BootstrapResult<()> {
        ctx.provide_router(self)
    }
}

impl Plugin for Store {
    fn name(&self) -> &'static str {
        "store"
    }

    fn install(self, ctx: &mut AppContext) -> BootstrapResult<()> {
        ctx.provide_store(self)
    }
}
