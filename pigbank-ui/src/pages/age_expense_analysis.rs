//! Age Expense Analysis Page
//!
//! Breaks the user's spending down by category and month, labelled with the
//! user's age group.

use leptos::*;
use leptos_router::*;

use crate::routing::Routing;
use crate::state::global::use_global_state;

#[component]
pub fn AgeExpenseAnalysis() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let state = use_global_state();

    let age_group = move || {
        state
            .user
            .get()
            .and_then(|u| u.age_group())
            .map(|group| format!("Age group {group}"))
            .unwrap_or_else(|| "Age not set".to_string())
    };

    let by_category = move || {
        state.expenses.with(|ledger| {
            let total = ledger.total();
            ledger
                .totals_by_category()
                .into_iter()
                .map(|(category, amount)| (category, amount, share(amount, total)))
                .collect::<Vec<_>>()
        })
    };

    let by_month = move || state.expenses.with(|ledger| ledger.monthly_totals());
    let average = move || {
        state
            .expenses
            .with(|ledger| ledger.average_monthly())
            .map(|avg| format!("{avg:.2} per month on average"))
            .unwrap_or_default()
    };

    view! {
        <section class="page analysis">
            <h1>"Age expense analysis"</h1>
            <p class="muted">{age_group}</p>

            <Show
                when=move || state.expenses.with(|ledger| !ledger.is_empty())
                fallback=move || view! {
                    <p class="muted">
                        "Nothing to analyse yet. "
                        <A href=routing.href("/expenseList")>"Record an expense"</A>
                    </p>
                }
            >
                <div class="card">
                    <h2>"By category"</h2>
                    <table class="table">
                        {move || by_category()
                            .into_iter()
                            .map(|(category, amount, pct)| view! {
                                <tr>
                                    <td>{category}</td>
                                    <td class="num">{format!("{amount:.2}")}</td>
                                    <td class="num">{format!("{pct:.0}%")}</td>
                                </tr>
                            })
                            .collect_view()}
                    </table>
                </div>

                <div class="card">
                    <h2>"By month"</h2>
                    <table class="table">
                        {move || by_month()
                            .into_iter()
                            .map(|((year, month), amount)| view! {
                                <tr>
                                    <td>{format!("{year}-{month:02}")}</td>
                                    <td class="num">{format!("{amount:.2}")}</td>
                                </tr>
                            })
                            .collect_view()}
                    </table>
                    <p class="muted">{average}</p>
                </div>
            </Show>
        </section>
    }
}

/// Percentage of `total` that `amount` makes up
fn share(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}
