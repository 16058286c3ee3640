//! Page Views
//!
//! Identifiers for the page-level views the route table dispatches to.
//! Each runtime (headless host, Leptos front-end) maps a [`ViewId`] to its
//! own renderer.

use serde::Serialize;
use std::fmt;

/// Name of the root component the application instance is bound to
pub const ROOT_COMPONENT: &str = "App";

/// A page-level view that a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    /// Landing page introducing the piggy bank
    PigIntro,
    Login,
    SignUp,
    /// Spending broken down against the user's age group
    AgeExpenseAnalysis,
    Home,
    ExpenseList,
}

impl ViewId {
    /// Every view, in route declaration order
    pub const ALL: [ViewId; 6] = [
        ViewId::PigIntro,
        ViewId::Login,
        ViewId::SignUp,
        ViewId::AgeExpenseAnalysis,
        ViewId::Home,
        ViewId::ExpenseList,
    ];

    /// Component name of the view
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::PigIntro => "PigIntro",
            ViewId::Login => "Login",
            ViewId::SignUp => "SignUp",
            ViewId::AgeExpenseAnalysis => "AgeExpenseAnalysis",
            ViewId::Home => "Home",
            ViewId::ExpenseList => "ExpenseList",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_are_distinct() {
        let mut names: Vec<_> = ViewId::ALL.iter().map(ViewId::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ViewId::ALL.len());
    }

    #[test]
    fn test_display_matches_component_name() {
        assert_eq!(ViewId::AgeExpenseAnalysis.to_string(), "AgeExpenseAnalysis");
        assert_eq!(
            serde_json::to_string(&ViewId::SignUp).unwrap(),
            "\"SignUp\""
        );
    }
}
