//! Two-pane layout with a draggable vertical splitter.
//!
//! Document-level mousemove/mouseup listeners exist only while a drag is
//! active and are detached on mouseup, so an idle page registers no global
//! handlers. Moves are throttled to roughly one update per frame; the
//! throttle is a rendering optimization only.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const MIN_LEFT_PCT: f64 = 20.0;
pub const MAX_LEFT_PCT: f64 = 80.0;
pub const DEFAULT_LEFT_PCT: f64 = 40.0;

/// ~60 updates per second.
pub const MOVE_THROTTLE_MS: f64 = 16.0;

/// Clamp a left-pane width percentage to the allowed range.
pub fn clamp_left_pct(pct: f64) -> f64 {
    pct.clamp(MIN_LEFT_PCT, MAX_LEFT_PCT)
}

/// Compute the clamped left-pane percentage for a pointer position.
/// Returns `None` when the container has no measurable width.
pub fn left_pct_from_pointer(client_x: f64, container_left: f64, container_width: f64) -> Option<f64> {
    if container_width <= 0.0 {
        return None;
    }
    let pct = (client_x - container_left) / container_width * 100.0;
    Some(clamp_left_pct(pct))
}

/// True when enough time has passed since the last applied move.
pub fn throttle_elapsed(now_ms: f64, last_ms: f64) -> bool {
    now_ms - last_ms >= MOVE_THROTTLE_MS
}

struct DragListeners {
    on_move: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_up: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

fn detach(document: &web_sys::Document, listeners: &DragListeners) {
    let _ = document.remove_event_listener_with_callback(
        "mousemove",
        listeners.on_move.as_ref().unchecked_ref(),
    );
    let _ = document.remove_event_listener_with_callback(
        "mouseup",
        listeners.on_up.as_ref().unchecked_ref(),
    );
}

#[component]
pub fn SplitPane<L, R>(left: L, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + Send + 'static,
    R: Fn() -> AnyView + Send + 'static,
{
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let left_width = RwSignal::new(DEFAULT_LEFT_PCT);
    let is_resizing = RwSignal::new(false);
    let last_update = StoredValue::new(0.0_f64);

    // Active drag listeners. Kept alive here so mouseup can detach them
    // without dropping a closure that is still executing; they are dropped
    // on the next drag start or on cleanup.
    let listeners = StoredValue::new_local(None::<DragListeners>);

    let start_resize = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };

        // Drop listeners left over from a previous drag.
        listeners.update_value(|slot| {
            if let Some(old) = slot.take() {
                detach(&document, &old);
            }
        });

        is_resizing.set(true);

        let on_move = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if !is_resizing.get_untracked() {
                return;
            }
            let now = js_sys::Date::now();
            if !throttle_elapsed(now, last_update.get_value()) {
                return;
            }
            last_update.set_value(now);

            if let Some(container) = container_ref.get_untracked() {
                let rect = container.get_bounding_client_rect();
                if let Some(pct) =
                    left_pct_from_pointer(ev.client_x() as f64, rect.left(), rect.width())
                {
                    left_width.set(pct);
                }
            }
        });

        let on_up = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_: web_sys::MouseEvent| {
            is_resizing.set(false);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                // Detach only; the closures stay stored until the next drag.
                listeners.with_value(|slot| {
                    if let Some(active) = slot.as_ref() {
                        detach(&document, active);
                    }
                });
            }
        });

        let _ = document
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        let _ = document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref());

        listeners.set_value(Some(DragListeners { on_move, on_up }));
    };

    on_cleanup(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            listeners.update_value(|slot| {
                if let Some(old) = slot.take() {
                    detach(&document, &old);
                }
            });
        }
    });

    view! {
        <div class="split-pane" node_ref=container_ref>
            <div
                class="split-pane__left"
                style=move || format!("width: {}%;", left_width.get())
            >
                {left()}
            </div>
            <div
                class="split-pane__divider"
                class:active=move || is_resizing.get()
                on:mousedown=start_resize
            >
                <div class="split-pane__grip"></div>
            </div>
            <div
                class="split-pane__right"
                style=move || format!("width: {}%;", 100.0 - left_width.get())
            >
                {right()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_is_clamped_inclusive() {
        // Far left of the container and far beyond the right edge.
        assert_eq!(left_pct_from_pointer(-500.0, 0.0, 1000.0), Some(20.0));
        assert_eq!(left_pct_from_pointer(5000.0, 0.0, 1000.0), Some(80.0));
        // Exactly on the bounds.
        assert_eq!(left_pct_from_pointer(200.0, 0.0, 1000.0), Some(20.0));
        assert_eq!(left_pct_from_pointer(800.0, 0.0, 1000.0), Some(80.0));
        // In between, offset container.
        assert_eq!(left_pct_from_pointer(600.0, 100.0, 1000.0), Some(50.0));
    }

    #[test]
    fn degenerate_container_yields_no_update() {
        assert_eq!(left_pct_from_pointer(100.0, 0.0, 0.0), None);
        assert_eq!(left_pct_from_pointer(100.0, 0.0, -10.0), None);
    }

    #[test]
    fn throttle_coalesces_fast_moves() {
        assert!(!throttle_elapsed(10.0, 0.0));
        assert!(throttle_elapsed(16.0, 0.0));
        assert!(throttle_elapsed(100.0, 0.0));
    }
}
