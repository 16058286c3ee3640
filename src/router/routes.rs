//! Application routes
//!
//! The navigation surface of the app: six literal paths, two of them named.

use super::error::RouteResult;
use super::table::RouteTable;
use crate::views::ViewId;

/// Build the application's route table
pub fn app_routes() -> RouteResult<RouteTable> {
    let mut builder = RouteTable::builder();
    builder
        .register("/", ViewId::PigIntro, Some("PigIntro"))?
        .register("/login", ViewId::Login, None)?
        .register("/signup", ViewId::SignUp, None)?
        .register("/ageExpenseAnalysis", ViewId::AgeExpenseAnalysis, None)?
        .register("/home", ViewId::Home, None)?
        .register("/expenseList", ViewId::ExpenseList, Some("ExpenseList"))?;
    Ok(builder.build())
}
