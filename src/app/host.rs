//! Host page abstraction
//!
//! The page the application mounts into: element lookup, stylesheet loading,
//! the document location and rendering. [`HeadlessHost`] is an in-memory page
//! used by the CLI and by tests.

use serde::Serialize;

use crate::router::RouteMatch;
use crate::views::ViewId;

/// Handle to an element in the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The page an application is mounted into
pub trait Host {
    /// Find the element addressed by a selector
    fn find_element(&self, selector: &str) -> Option<ElementId>;

    /// Load a stylesheet into the page
    fn load_stylesheet(&mut self, href: &str);

    /// Current document location
    fn location(&self) -> String;

    /// Push a new document location
    fn push_location(&mut self, location: &str);

    /// Render a view into the target element; `None` renders nothing
    fn render(&mut self, target: &ElementId, view: Option<&RouteMatch>);
}

/// Something observable that happened to a [`HeadlessHost`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    StylesheetLoaded { href: String },
    LocationPushed { location: String },
    Rendered { target: String, view: Option<ViewId> },
}

/// In-memory host page
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    elements: Vec<String>,
    location: String,
    stylesheets: Vec<String>,
    rendered: Option<ViewId>,
    events: Vec<HostEvent>,
}

impl HeadlessHost {
    /// A page at `location` containing the given element ids
    pub fn new(location: impl Into<String>, element_ids: &[&str]) -> Self {
        Self {
            elements: element_ids.iter().map(|id| id.to_string()).collect(),
            location: location.into(),
            stylesheets: Vec::new(),
            rendered: None,
            events: Vec::new(),
        }
    }

    /// A page at `location` with the conventional `app` element
    pub fn with_app_element(location: impl Into<String>) -> Self {
        Self::new(location, &["app"])
    }

    /// View currently shown in the page
    pub fn rendered(&self) -> Option<ViewId> {
        self.rendered
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }
}

impl Host for HeadlessHost {
    fn find_element(&self, selector: &str) -> Option<ElementId> {
        // Id selectors only
        let id = selector.strip_prefix('#')?;
        self.elements
            .iter()
            .find(|el| el.as_str() == id)
            .map(|el| ElementId(el.clone()))
    }

    fn load_stylesheet(&mut self, href: &str) {
        self.stylesheets.push(href.to_string());
        self.events.push(HostEvent::StylesheetLoaded {
            href: href.to_string(),
        });
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn push_location(&mut self, location: &str) {
        self.location = location.to_string();
        self.events.push(HostEvent::LocationPushed {
            location: location.to_string(),
        });
    }

    fn render(&mut self, target: &ElementId, view: Option<&RouteMatch>) {
        self.rendered = view.map(|m| m.view);
        self.events.push(HostEvent::Rendered {
            target: target.0.clone(),
            view: self.rendered,
        });
    }
}
