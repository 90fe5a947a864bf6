//! Client-side routing with an auth guard on the app pages.

use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::settings::ui::SettingsPage;
use crate::layout::AppShell;
use crate::system::auth::context::use_auth;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Dashboard and settings require the demo sign-in; unauthenticated
/// visitors fall back to the home page with its sign-in panel.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_signed_in()
            fallback=|| view! { <HomePage /> }
        >
            {
                let children = children.clone();
                view! { <AppShell>{children()}</AppShell> }
            }
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <HomePage /> }>
                <Route path=path!("/") view=HomePage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <Guarded><DashboardPage /></Guarded> }
                />
                <Route
                    path=path!("/settings")
                    view=|| view! { <Guarded><SettingsPage /></Guarded> }
                />
            </Routes>
        </Router>
    }
}
