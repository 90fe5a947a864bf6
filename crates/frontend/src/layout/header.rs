use crate::layout::use_layout;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let layout = use_layout();
    let navigate = use_navigate();

    view! {
        <header class="header">
            <button
                class="header__menu-btn"
                aria-label="Open sidebar"
                on:click=move |_| layout.sidebar_open.set(true)
            >
                {icon("menu")}
            </button>
            <div class="header__separator"></div>
            <div class="header__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate("/", Default::default())
                >
                    {icon("home")}
                    " Home"
                </button>
            </div>
        </header>
    }
}
