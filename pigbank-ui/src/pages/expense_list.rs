//! Expense List Page
//!
//! Records new expenses and lists the existing ones.

use chrono::NaiveDate;
use leptos::*;

use pigbank::store::{Expense, NewExpense};

use crate::state::global::use_global_state;

const CATEGORIES: [&str; 5] = ["Food", "Transport", "Housing", "Leisure", "Other"];

#[component]
pub fn ExpenseList() -> impl IntoView {
    let state = use_global_state();
    let items = move || state.expenses.with(|ledger| ledger.items().to_vec());

    view! {
        <section class="page expenses">
            <h1>"Expenses"</h1>

            <ExpenseForm />

            <Show
                when=move || state.expenses.with(|ledger| !ledger.is_empty())
                fallback=|| view! { <p class="muted">"No expenses yet. The pig is still full."</p> }
            >
                <ul class="expense-list">
                    <For
                        each=items
                        key=|expense| expense.id
                        children=move |expense| view! { <ExpenseRow expense=expense /> }
                    />
                </ul>
                <p class="expense-total">
                    {move || state.expenses.with(|ledger| format!("Total: {:.2}", ledger.total()))}
                </p>
            </Show>
        </section>
    }
}

/// Form for logging a new expense
#[component]
fn ExpenseForm() -> impl IntoView {
    let state = use_global_state();

    let today = chrono::Utc::now().date_naive();
    let (title, set_title) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(CATEGORIES[0].to_string());
    let (date, set_date) = create_signal(today.format("%Y-%m-%d").to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match parse_expense(&title.get(), &amount.get(), &category.get(), &date.get()) {
            Ok(expense) => {
                let title = expense.title.clone();
                state.add_expense(expense);
                state.show_success(&format!("Recorded {title}"));
                set_title.set(String::new());
                set_amount.set(String::new());
            }
            Err(msg) => state.show_error(msg),
        }
    };

    view! {
        <form on:submit=on_submit class="form form-inline">
            <input
                type="text"
                placeholder="What for?"
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                min="0"
                placeholder="Amount"
                prop:value=amount
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                {CATEGORIES
                    .into_iter()
                    .map(|c| view! { <option value=c selected=move || category.get() == c>{c}</option> })
                    .collect_view()}
            </select>
            <input
                type="date"
                prop:value=date
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit" class="button">
                <i class="fa-solid fa-plus" />
                " Add"
            </button>
        </form>
    }
}

#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let state = use_global_state();
    let id = expense.id;

    view! {
        <li class="expense-row">
            <span class="expense-date">{expense.spent_on.format("%Y-%m-%d").to_string()}</span>
            <span class="expense-title">{expense.title}</span>
            <span class="expense-category">{expense.category}</span>
            <span class="expense-amount">{format!("{:.2}", expense.amount)}</span>
            <button
                class="icon-button"
                title="Remove"
                on:click=move |_| state.remove_expense(id)
            >
                <i class="fa-solid fa-trash" />
            </button>
        </li>
    }
}

fn parse_expense(
    title: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<NewExpense, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the expense a title");
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero");
    }
    let spent_on =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| "Pick a valid date")?;

    Ok(NewExpense {
        title: title.to_string(),
        amount,
        category: category.to_string(),
        spent_on,
    })
}
