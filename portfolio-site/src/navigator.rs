//! Smooth scrolling to section anchors in the live document.

use portfolio_view::nav::Viewport;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// [`Viewport`] over `window.document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
