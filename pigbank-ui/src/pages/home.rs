//! Home Page
//!
//! Signed-in landing page with a spending summary.

use leptos::*;
use leptos_router::*;

use crate::routing::Routing;
use crate::state::global::use_global_state;

#[component]
pub fn Home() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let state = use_global_state();

    let greeting = move || {
        state
            .user
            .get()
            .map(|u| format!("Oink, {}!", u.username))
            .unwrap_or_else(|| "Oink!".to_string())
    };
    let total = move || state.expenses.with(|ledger| format!("{:.2}", ledger.total()));
    let count = move || state.expenses.with(|ledger| ledger.len());

    view! {
        <section class="page home">
            <h1>{greeting}</h1>

            <div class="card summary">
                <span class="muted">"Total spent"</span>
                <span class="summary-value">{total}</span>
                <span class="muted">{move || format!("{} expenses", count())}</span>
            </div>

            <div class="actions">
                <A href=routing.href("/expenseList") class="button">
                    <i class="fa-solid fa-list" />
                    " Expenses"
                </A>
                <A href=routing.href("/ageExpenseAnalysis") class="button button-secondary">
                    <i class="fa-solid fa-chart-pie" />
                    " Age analysis"
                </A>
            </div>
        </section>
    }
}
