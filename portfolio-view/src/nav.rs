//! Navigation state: active section, mobile menu, scrolled flag.
//!
//! The active section only changes through [`navigate`]; scrolling updates
//! the `scrolled` flag and nothing else.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Vertical offset past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// A page region addressable by anchor and navigation button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Button text in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Transient UI state owned by the page, reset on reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    /// Last recorded offset was past [`SCROLL_THRESHOLD_PX`]
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn record_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD_PX;
    }

    /// Mark `section` active and close the mobile menu.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }
}

/// Something that can bring an anchor into view.
pub trait Viewport {
    /// Request a smooth scroll to the element with id `anchor`.
    ///
    /// Returns `false` when no such element exists.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

/// Scroll to `section` and make it active.
///
/// A missing anchor leaves `state` untouched. Used by the desktop buttons,
/// the mobile menu and the hero call-to-action alike, so the mobile menu is
/// closed by any navigation.
pub fn navigate(state: &mut NavState, viewport: &impl Viewport, section: Section) -> bool {
    if !viewport.scroll_to_anchor(section.anchor()) {
        return false;
    }
    state.select(section);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingViewport {
        anchors: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl RecordingViewport {
        fn with_all_sections() -> Self {
            RecordingViewport {
                anchors: Section::ALL.iter().map(|s| s.anchor()).collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if !self.anchors.contains(&anchor) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(anchor.to_string());
            true
        }
    }

    #[test]
    fn navigate_sets_active_and_scrolls_for_every_section() {
        let viewport = RecordingViewport::with_all_sections();
        let mut state = NavState::default();

        for section in Section::ALL {
            assert!(navigate(&mut state, &viewport, section));
            assert_eq!(state.active, section);
            assert_eq!(
                viewport.scrolled_to.borrow().last().map(String::as_str),
                Some(section.anchor())
            );
        }
    }

    #[test]
    fn navigate_closes_menu_regardless_of_prior_state() {
        let viewport = RecordingViewport::with_all_sections();

        let mut open = NavState { menu_open: true, ..Default::default() };
        navigate(&mut open, &viewport, Section::Contact);
        assert!(!open.menu_open);

        let mut closed = NavState::default();
        navigate(&mut closed, &viewport, Section::About);
        assert!(!closed.menu_open);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let viewport = RecordingViewport {
            anchors: vec!["home"],
            ..Default::default()
        };
        let mut state = NavState { menu_open: true, ..Default::default() };

        assert!(!navigate(&mut state, &viewport, Section::Projects));
        assert_eq!(state, NavState { menu_open: true, ..Default::default() });
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn scrolled_tracks_last_offset_only() {
        let mut state = NavState::default();
        state.record_scroll(50.0);
        assert!(!state.scrolled);
        state.record_scroll(50.5);
        assert!(state.scrolled);
        state.record_scroll(400.0);
        state.record_scroll(0.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn scrolling_never_changes_active_section() {
        let mut state = NavState { active: Section::Experience, ..Default::default() };
        state.record_scroll(10_000.0);
        assert_eq!(state.active, Section::Experience);
    }

    #[test]
    fn toggle_menu_flips() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(UnknownSection("blog".into()))
        );
    }
}
