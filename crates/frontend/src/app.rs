use crate::layout::LayoutContext;
use crate::routes::AppRoutes;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session-scoped contexts. Nothing is persisted: auth and layout state
    // live only as long as the page.
    provide_context(AuthContext::new());
    provide_context(LayoutContext::new());

    view! {
        <AppRoutes />
    }
}
