//! Sign-up Page

use leptos::*;
use leptos_router::*;

use pigbank::store::User;

use crate::routing::Routing;
use crate::state::global::use_global_state;

#[component]
pub fn SignUp() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let state = use_global_state();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (age, set_age) = create_signal(String::new());
    let home = routing.href("/home");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        if name.is_empty() {
            state.show_error("Enter a username");
            return;
        }
        let age = match parse_age(&age.get()) {
            Ok(age) => age,
            Err(msg) => {
                state.show_error(msg);
                return;
            }
        };

        state.sign_in(User::new(name, age));
        state.show_success("Account created");
        navigate(&home, Default::default());
    };

    view! {
        <section class="page auth">
            <h1>"Sign up"</h1>

            <form on:submit=on_submit class="form">
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <label for="age">"Age (optional)"</label>
                <input
                    id="age"
                    type="number"
                    min="0"
                    max="150"
                    prop:value=age
                    on:input=move |ev| set_age.set(event_target_value(&ev))
                />

                <button type="submit" class="button">"Create account"</button>
            </form>

            <p class="muted">
                "Already saving? "
                <A href=routing.href("/login")>"Log in"</A>
            </p>
        </section>
    }
}

/// Empty input means no age given
fn parse_age(input: &str) -> Result<Option<u32>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u32>() {
        Ok(age) if age <= 150 => Ok(Some(age)),
        _ => Err("Age must be a whole number between 0 and 150"),
    }
}
