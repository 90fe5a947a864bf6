pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Transient UI chrome state shared across pages.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found in component tree")
}

/// Shell for the authenticated pages: slide-over sidebar, top header and
/// the page content below.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <sidebar::Sidebar />
            <header::Header />
            <main class="app-content">{children()}</main>
        </div>
    }
}
