//! Slide-over navigation sidebar.

use crate::layout::use_layout;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", href: "/", icon: "home" },
        NavItem { label: "Dashboard", href: "/dashboard", icon: "document-text" },
        NavItem { label: "Settings", href: "/settings", icon: "settings" },
    ]
}

/// True when `href` matches the current path ("/" must match exactly,
/// other entries match by prefix).
pub fn is_current_page(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(href)
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let layout = use_layout();
    let location = use_location();

    view! {
        <Show when=move || layout.sidebar_open.get()>
            <div class="sidebar-overlay" on:click=move |_| layout.sidebar_open.set(false)></div>
            <aside class="sidebar">
                <div class="sidebar__top">
                    <span class="sidebar__brand">{icon("chip")} " RAG Assistant"</span>
                    <button
                        class="sidebar__close"
                        aria-label="Close sidebar"
                        on:click=move |_| layout.sidebar_open.set(false)
                    >
                        {icon("x")}
                    </button>
                </div>
                <nav class="sidebar__nav">
                    {nav_items()
                        .into_iter()
                        .map(|item| {
                            let navigate = use_navigate();
                            let pathname = location.pathname;
                            view! {
                                <button
                                    class="sidebar__link"
                                    class:current=move || is_current_page(item.href, &pathname.get())
                                    on:click=move |_| {
                                        navigate(item.href, Default::default());
                                        layout.sidebar_open.set(false);
                                    }
                                >
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_matches_exactly() {
        assert!(is_current_page("/", "/"));
        assert!(!is_current_page("/", "/dashboard"));
    }

    #[test]
    fn other_entries_match_by_prefix() {
        assert!(is_current_page("/dashboard", "/dashboard"));
        assert!(is_current_page("/settings", "/settings"));
        assert!(!is_current_page("/settings", "/dashboard"));
    }
}
