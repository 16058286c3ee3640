//! UI Components
//!
//! Shared Leptos components.

pub mod nav;
pub mod toast;

pub use nav::Nav;
pub use toast::Toast;
