//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

use crate::routing::Routing;
use crate::state::global::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let state = use_global_state();
    let navigate = use_navigate();

    let intro = routing.href("/");
    let on_sign_out = {
        let intro = intro.clone();
        move |_| {
            state.sign_out();
            state.show_success("Signed out");
            navigate(&intro, Default::default());
        }
    };

    view! {
        <nav class="nav">
            <A href=intro class="nav-brand">
                <i class="fa-solid fa-piggy-bank" />
                <span>"Pigbank"</span>
            </A>

            <div class="nav-links">
                {move || {
                    if state.user.get().is_some() {
                        view! {
                            <NavLink href=routing.href("/home") label="Home" />
                            <NavLink href=routing.href("/expenseList") label="Expenses" />
                            <NavLink href=routing.href("/ageExpenseAnalysis") label="Analysis" />
                            <button class="nav-link" on:click=on_sign_out.clone()>"Sign out"</button>
                        }.into_view()
                    } else {
                        view! {
                            <NavLink href=routing.href("/login") label="Log in" />
                            <NavLink href=routing.href("/signup") label="Sign up" />
                        }.into_view()
                    }
                }}
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="nav-link-active">
            {label}
        </A>
    }
}
