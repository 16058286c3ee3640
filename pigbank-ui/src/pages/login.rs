//! Login Page

use leptos::*;
use leptos_router::*;

use pigbank::store::User;

use crate::routing::Routing;
use crate::state::global::use_global_state;

#[component]
pub fn Login() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let state = use_global_state();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let home = routing.href("/home");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        if name.is_empty() {
            state.show_error("Enter a username");
            return;
        }

        let user = state
            .known_user(&name)
            .unwrap_or_else(|| User::new(name.clone(), None));
        state.sign_in(user);
        state.show_success(&format!("Welcome back, {name}"));
        navigate(&home, Default::default());
    };

    view! {
        <section class="page auth">
            <h1>"Log in"</h1>

            <form on:submit=on_submit class="form">
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <button type="submit" class="button">"Log in"</button>
            </form>

            <p class="muted">
                "New here? "
                <A href=routing.href("/signup")>"Create an account"</A>
            </p>
        </section>
    }
}
