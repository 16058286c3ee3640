//! Pages
//!
//! Top-level page components, one per route.

pub mod age_expense_analysis;
pub mod expense_list;
pub mod home;
pub mod login;
pub mod pig_intro;
pub mod sign_up;

pub use age_expense_analysis::AgeExpenseAnalysis;
pub use expense_list::ExpenseList;
pub use home::Home;
pub use login::Login;
pub use pig_intro::PigIntro;
pub use sign_up::SignUp;
