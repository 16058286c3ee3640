//! # Pigbank
//!
//! Bootstrap and route table of the Pigbank expense tracker, a single-page
//! web application.
//!
//! ## Modules
//!
//! - [`router`]: route table, history-mode addressing and navigation
//! - [`store`]: shared state container with typed slices
//! - [`app`]: application instance, plugins and the mount sequence
//! - [`assets`]: stylesheets loaded at startup
//! - [`config`]: TOML configuration with environment overrides
//! - [`views`]: identifiers of the page views
//!
//! The crate is independent of any UI runtime. A [`app::Host`] stands in for
//! the page; the `pigbank-ui` crate renders the same route table with Leptos.
//!
//! ## Quick Start
//!
//! ```rust
//! use pigbank::app::{bootstrap, HeadlessHost};
//! use pigbank::{Config, ViewId};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let host = HeadlessHost::with_app_element("/");
//!     let mut app = bootstrap(&Config::default(), host)?;
//!
//!     app.navigate("/login")?;
//!     assert_eq!(app.current().map(|m| m.view), Some(ViewId::Login));
//!
//!     app.navigate("/expenseList")?;
//!     assert_eq!(app.host().rendered(), Some(ViewId::ExpenseList));
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod assets;
pub mod config;
pub mod router;
pub mod store;
pub mod views;

// Re-export top-level types for convenience
pub use app::{
    bootstrap, Application, BootstrapError, BootstrapResult, HeadlessHost, Host, MountedApp,
    Plugin,
};

pub use router::{
    app_routes, History, HistoryMode, Route, RouteError, RouteMatch, RouteResult, RouteTable,
    Router,
};

pub use store::{Expense, ExpenseLedger, NewExpense, Session, Slice, Store, User};

pub use config::{Config, ConfigError, LoggingConfig};

pub use views::{ViewId, ROOT_COMPONENT};
