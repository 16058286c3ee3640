//! Intro Page
//!
//! Landing page shown at the root path.

use leptos::*;
use leptos_router::*;

use crate::routing::Routing;

#[component]
pub fn PigIntro() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");

    view! {
        <section class="page intro">
            <i class="fa-solid fa-piggy-bank intro-logo" />
            <h1>"Pigbank"</h1>
            <p class="muted">"Feed the pig, track where the coins go."</p>

            <div class="actions">
                <A href=routing.href("/login") class="button">"Log in"</A>
                <A href=routing.href("/signup") class="button button-secondary">"Sign up"</A>
            </div>
        </section>
    }
}
