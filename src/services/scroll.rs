//! Window scroll position shared across the layout.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll offset in px past which the navbar switches to its elevated style.
const ELEVATION_THRESHOLD: f64 = 50.0;

pub fn elevated_at(y: f64) -> bool {
    y > ELEVATION_THRESHOLD
}

#[derive(Clone, Copy)]
pub struct ScrollState {
    pub is_scrolled: RwSignal<bool>,
}

/// Install the shared scroll state and its window listener.
///
/// Call once from the app root. The listener lives for the whole application
/// and is deliberately forgotten; route components only read the signal, so
/// remounting them on navigation never registers another listener.
pub fn provide_scroll_state() {
    let is_scrolled = RwSignal::new(false);

    let handle_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let y = window.scroll_y().unwrap_or(0.0);
            is_scrolled.set(elevated_at(y));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("scroll", handle_scroll.as_ref().unchecked_ref());
    }
    handle_scroll.forget();

    provide_context(ScrollState { is_scrolled });
}

pub fn use_scroll_state() -> ScrollState {
    expect_context::<ScrollState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_threshold_boundary() {
        assert!(!elevated_at(0.0));
        assert!(!elevated_at(50.0));
        assert!(elevated_at(50.1));
        assert!(elevated_at(900.0));
    }
}
