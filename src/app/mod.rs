//! Application Bootstrap
//!
//! One-time startup sequence: create the application instance, attach the
//! router and the store, load static assets, mount into the host page.
//!
//! ```text
//! Application::new ─▶ use_plugin(router) ─▶ use_plugin(store) ─▶ mount(#app)
//!                         (either order, each exactly once)
//! ```
//!
//! Mounting consumes the [`Application`], so it happens at most once. After
//! mount, [`MountedApp`] dispatches navigation to the router and renders the
//! matched view into the host.
//!
//! # Example
//!
//! ```rust
//! use pigbank::app::{bootstrap, HeadlessHost};
//! use pigbank::{Config, ViewId};
//!
//! let mut app = bootstrap(&Config::default(), HeadlessHost::with_app_element("/")).unwrap();
//! assert_eq!(app.host().rendered(), Some(ViewId::PigIntro));
//!
//! app.navigate("/login").unwrap();
//! assert_eq!(app.host().rendered(), Some(ViewId::Login));
//! ```

pub mod error;
pub mod host;
pub mod plugin;

pub use error::{BootstrapError, BootstrapResult};
pub use host::{ElementId, HeadlessHost, Host, HostEvent};
pub use plugin::{AppContext, Plugin};

use serde::Serialize;

use crate::assets::AssetManifest;
use crate::config::Config;
use crate::router::{app_routes, History, RouteMatch, RouteResult, Router};
use crate::store::Store;
use crate::views::ROOT_COMPONENT;

/// Startup milestones of an application instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Lifecycle {
    Created { root: &'static str },
    PluginInstalled { plugin: &'static str },
    Mounted { selector: String },
}

/// An application instance that has not been mounted yet
#[derive(Debug)]
pub struct Application {
    root: &'static str,
    ctx: AppContext,
    installed: Vec<&'static str>,
    lifecycle: Vec<Lifecycle>,
}

impl Application {
    /// Create an application bound to a root component
    pub fn new(root: &'static str) -> Self {
        tracing::info!(root, "Application created");
        Self {
            root,
            ctx: AppContext::default(),
            installed: Vec::new(),
            lifecycle: vec![Lifecycle::Created { root }],
        }
    }

    /// Attach a plugin. Each plugin may be attached once.
    pub fn use_plugin<P: Plugin>(&mut self, plugin: P) -> BootstrapResult<&mut Self> {
        let name = plugin.name();
        if self.installed.contains(&name) {
            return Err(BootstrapError::DuplicatePlugin(name));
        }

        plugin.install(&mut self.ctx)?;

        tracing::debug!(plugin = name, "Plugin installed");
        self.installed.push(name);
        self.lifecycle.push(Lifecycle::PluginInstalled { plugin: name });
        Ok(self)
    }

    /// True once both router and store are attached
    pub fn is_ready(&self) -> bool {
        self.ctx.has_router() && self.ctx.has_store()
    }

    pub fn lifecycle(&self) -> &[Lifecycle] {
        &self.lifecycle
    }

    /// Mount into the host element matching `selector`.
    ///
    /// Fails without touching the host if router or store is missing. On
    /// success the current document location is resolved and rendered.
    pub fn mount<H: Host>(self, mut host: H, selector: &str) -> BootstrapResult<MountedApp<H>> {
        let Application {
            root,
            ctx,
            mut lifecycle,
            ..
        } = self;

        let (mut router, store) = ctx.into_parts()?;

        let target = host
            .find_element(selector)
            .ok_or_else(|| BootstrapError::MountTargetMissing(selector.to_string()))?;

        let location = host.location();
        let initial = router.push(&location).ok();
        host.render(&target, initial.as_ref());

        lifecycle.push(Lifecycle::Mounted {
            selector: selector.to_string(),
        });
        tracing::info!(
            root,
            selector,
            location = %location,
            view = ?initial.as_ref().map(|m| m.view),
            "Application mounted"
        );

        Ok(MountedApp {
            root,
            router,
            store,
            host,
            target,
            lifecycle,
        })
    }
}

/// A mounted application, driving navigation and rendering
#[derive(Debug)]
pub struct MountedApp<H: Host> {
    root: &'static str,
    router: Router,
    store: Store,
    host: H,
    target: ElementId,
    lifecycle: Vec<Lifecycle>,
}

impl<H: Host> MountedApp<H> {
    /// Navigate to a document location and render the result.
    ///
    /// An unmatched location renders nothing and returns the NotFound error.
    pub fn navigate(&mut self, location: &str) -> RouteResult<RouteMatch> {
        self.host.push_location(location);
        let result = self.router.push(location);
        self.host.render(&self.target, result.as_ref().ok());
        result
    }

    /// Navigate to a named route
    pub fn navigate_named(&mut self, name: &str) -> RouteResult<RouteMatch> {
        let route = self.router.table().resolve_by_name(name)?;
        let location = self.router.history().href(&route.path);
        self.navigate(&location)
    }

    /// Go back one history entry
    pub fn back(&mut self) -> Option<RouteResult<RouteMatch>> {
        let result = self.router.back()?;
        if let Some(location) = self.router.location() {
            self.host.push_location(location);
        }
        self.host.render(&self.target, result.as_ref().ok());
        Some(result)
    }

    /// Route currently rendered
    pub fn current(&self) -> Option<&RouteMatch> {
        self.router.current()
    }

    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Store handle for views
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn target(&self) -> &ElementId {
        &self.target
    }

    pub fn lifecycle(&self) -> &[Lifecycle] {
        &self.lifecycle
    }
}

/// Run the startup sequence against a host page
pub fn bootstrap<H: Host>(config: &Config, mut host: H) -> BootstrapResult<MountedApp<H>> {
    config.validate()?;

    let mut app = Application::new(ROOT_COMPONENT);
    let store = Store::new();
    let router = Router::new(app_routes()?, History::new(&config.router.base));

    app.use_plugin(router)?.use_plugin(store)?;

    AssetManifest::from_config(&config.assets).load_into(&mut host);

    app.mount(host, &config.app.mount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::router::{HistoryMode, RouteError};
    use crate::store::User;
    use crate::views::ViewId;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Plugin wrapper that records its installation
    struct Journaled<P> {
        inner: P,
        journal: Journal,
    }

    impl<P: Plugin> Plugin for Journaled<P> {
        fn name(&self) -> &'static str {
            self.inner.name()
        }

        fn install(self, ctx: &mut AppContext) -> BootstrapResult<()> {
            self.journal
                .borrow_mut()
                .push(format!("install:{}", self.inner.name()));
            self.inner.install(ctx)
        }
    }

    /// Host wrapper that records page interactions
    struct JournalHost {
        inner: HeadlessHost,
        journal: Journal,
    }

    impl JournalHost {
        fn new(journal: &Journal) -> Self {
            Self {
                inner: HeadlessHost::with_app_element("/"),
                journal: Rc::clone(journal),
            }
        }
    }

    impl Host for JournalHost {
        fn find_element(&self, selector: &str) -> Option<ElementId> {
            self.journal.borrow_mut().push(format!("find:{selector}"));
            self.inner.find_element(selector)
        }

        fn load_stylesheet(&mut self, href: &str) {
            self.inner.load_stylesheet(href);
        }

        fn location(&self) -> String {
            self.inner.location()
        }

        fn push_location(&mut self, location: &str) {
            self.inner.push_location(location);
        }

        fn render(&mut self, target: &ElementId, view: Option<&RouteMatch>) {
            let name = view.map_or("none", |m| m.view.as_str());
            self.journal.borrow_mut().push(format!("render:{name}"));
            self.inner.render(target, view);
        }
    }

    fn router() -> Router {
        Router::new(app_routes().unwrap(), History::default())
    }

    fn journaled<P>(inner: P, journal: &Journal) -> Journaled<P> {
        Journaled {
            inner,
            journal: Rc::clone(journal),
        }
    }

    #[test]
    fn test_attachments_precede_mount() {
        let journal = Journal::default();

        let mut app = Application::new(ROOT_COMPONENT);
        app.use_plugin(journaled(Store::new(), &journal))
            .unwrap()
            .use_plugin(journaled(router(), &journal))
            .unwrap();
        assert!(app.is_ready());

        let mounted = app.mount(JournalHost::new(&journal), "#app").unwrap();

        assert_eq!(
            *journal.borrow(),
            ["install:store", "install:router", "find:#app", "render:PigIntro"]
        );
        assert_eq!(mounted.current().unwrap().view, ViewId::PigIntro);
    }

    #[test]
    fn test_mount_before_attachment_rejected() {
        let journal = Journal::default();

        let mut app = Application::new(ROOT_COMPONENT);
        app.use_plugin(journaled(router(), &journal)).unwrap();
        assert!(!app.is_ready());

        let result = app.mount(JournalHost::new(&journal), "#app");

        assert!(matches!(result, Err(BootstrapError::NotReady("store"))));
        // The host was never touched
        assert_eq!(*journal.borrow(), ["install:router"]);
    }

    #[test]
    fn test_mount_without_any_plugin_rejected() {
        let app = Application::new(ROOT_COMPONENT);
        let result = app.mount(HeadlessHost::with_app_element("/"), "#app");

        assert!(matches!(result, Err(BootstrapError::NotReady("router"))));
    }

    #[test]
    fn test_duplicate_plugin_rejected() {
        let mut app = Application::new(ROOT_COMPONENT);
        app.use_plugin(Store::new()).unwrap();

        let result = app.use_plugin(Store::new());
        assert!(matches!(result, Err(BootstrapError::DuplicatePlugin("store"))));
        assert_eq!(app.lifecycle().len(), 2);
    }

    #[test]
    fn test_missing_mount_target() {
        let host = HeadlessHost::new("/", &["root"]);
        let result = bootstrap(&Config::default(), host);

        assert!(matches!(
            result,
            Err(BootstrapError::MountTargetMissing(ref s)) if s == "#app"
        ));
    }

    #[test]
    fn test_bootstrap_lifecycle_and_assets() {
        let app = bootstrap(&Config::default(), HeadlessHost::with_app_element("/")).unwrap();

        assert_eq!(app.root(), "App");
        assert_eq!(app.target().as_str(), "app");
        assert_eq!(
            app.lifecycle(),
            [
                Lifecycle::Created { root: "App" },
                Lifecycle::PluginInstalled { plugin: "router" },
                Lifecycle::PluginInstalled { plugin: "store" },
                Lifecycle::Mounted {
                    selector: "#app".to_string()
                },
            ]
        );

        // Stylesheets are loaded before the first render
        let events = app.host().events();
        assert!(matches!(events[0], HostEvent::StylesheetLoaded { .. }));
        assert!(matches!(events[1], HostEvent::StylesheetLoaded { .. }));
        assert!(matches!(
            events[2],
            HostEvent::Rendered {
                view: Some(ViewId::PigIntro),
                ..
            }
        ));
    }

    #[test]
    fn test_navigation_end_to_end() {
        let mut app = bootstrap(&Config::default(), HeadlessHost::with_app_element("/")).unwrap();

        let matched = app.navigate("/login").unwrap();
        assert_eq!(matched.view, ViewId::Login);
        assert_eq!(app.host().rendered(), Some(ViewId::Login));

        let matched = app.navigate("/expenseList").unwrap();
        assert_eq!(matched.view, ViewId::ExpenseList);
        assert_eq!(app.host().rendered(), Some(ViewId::ExpenseList));
        assert_eq!(app.host().location(), "/expenseList");

        let previous = app.back().unwrap().unwrap();
        assert_eq!(previous.view, ViewId::Login);
        assert_eq!(app.host().location(), "/login");
    }

    #[test]
    fn test_unmatched_navigation_renders_nothing() {
        let mut app = bootstrap(&Config::default(), HeadlessHost::with_app_element("/")).unwrap();

        let err = app.navigate("/doesnotexist").unwrap_err();
        assert_eq!(err, RouteError::NotFound("/doesnotexist".to_string()));
        assert_eq!(app.host().rendered(), None);
        assert!(app.current().is_none());
    }

    #[test]
    fn test_navigate_named_under_base() {
        let mut config = Config::default();
        config.router.base = "/pigbank/".to_string();

        let host = HeadlessHost::with_app_element("/pigbank/home");
        let mut app = bootstrap(&config, host).unwrap();
        assert_eq!(app.host().rendered(), Some(ViewId::Home));

        app.navigate_named("ExpenseList").unwrap();
        assert_eq!(app.host().location(), "/pigbank/expenseList");

        assert!(app.navigate_named("Home").is_err());
        assert_eq!(app.host().rendered(), Some(ViewId::ExpenseList));
    }

    #[test]
    fn test_hash_mode_aborts_startup() {
        let mut config = Config::default();
        config.router.mode = HistoryMode::Hash;

        let result = bootstrap(&config, HeadlessHost::with_app_element("/"));
        assert!(matches!(
            result,
            Err(BootstrapError::Config(ConfigError::UnsupportedHistoryMode(_)))
        ));
    }

    #[test]
    fn test_views_share_the_store() {
        let app = bootstrap(&Config::default(), HeadlessHost::with_app_element("/")).unwrap();
        let view_store = app.store().clone();

        view_store
            .session()
            .update(|s| s.sign_in(User::new("oink", Some(42))));

        assert!(app.store().session().read(|s| s.is_signed_in()));
    }
}
