//! Window scroll listener feeding [`NavState::record_scroll`].

use leptos::ev;
use leptos::prelude::*;
use portfolio_view::nav::NavState;

/// Keep `nav.scrolled` in sync with the window offset.
///
/// Must be called inside a component; the listener is removed when that
/// component's owner is cleaned up.
pub fn track_scroll(nav: RwSignal<NavState>) {
    let record = move || {
        let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
            return;
        };
        let mut next = nav.get_untracked();
        next.record_scroll(offset);
        if next != nav.get_untracked() {
            nav.set(next);
        }
    };

    record();
    let handle = window_event_listener(ev::scroll, move |_| record());
    on_cleanup(move || handle.remove());
}
