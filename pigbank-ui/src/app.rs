//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use pigbank::ViewId;

use crate::components::{Nav, Toast};
use crate::pages::{AgeExpenseAnalysis, ExpenseList, Home, Login, PigIntro, SignUp};
use crate::routing::Routing;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App(routing: Routing) -> impl IntoView {
    // Provide global state and routing to all components
    provide_global_state();
    provide_context(routing);

    view! {
        <Router>
            <div class="app-shell">
                <Nav />

                <main class="app-main">
                    // Every location goes through the pigbank route table
                    <Routes>
                        <Route path="/" view=RoutedView />
                        <Route path="/*any" view=RoutedView />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Renders the view the current location resolves to
#[component]
fn RoutedView() -> impl IntoView {
    let routing = use_context::<Routing>().expect("Routing not found");
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        match routing.resolve(&pathname) {
            Ok(matched) => render_view(matched.view),
            Err(e) => {
                // No catch-all route: unmatched locations render nothing
                web_sys::console::warn_1(&format!("No match found for location: {e}").into());
                ().into_view()
            }
        }
    }
}

fn render_view(view: ViewId) -> View {
    match view {
        ViewId::PigIntro => view! { <PigIntro /> }.into_view(),
        ViewId::Login => view! { <Login /> }.into_view(),
        ViewId::SignUp => view! { <SignUp /> }.into_view(),
        ViewId::AgeExpenseAnalysis => view! { <AgeExpenseAnalysis /> }.into_view(),
        ViewId::Home => view! { <Home /> }.into_view(),
        ViewId::ExpenseList => view! { <ExpenseList /> }.into_view(),
    }
}
