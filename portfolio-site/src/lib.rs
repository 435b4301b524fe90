//! Client-side portfolio application.
//!
//! Wires the `portfolio-view` components to the browser: the profile fetch,
//! the scroll listener, anchor scrolling and console diagnostics.

pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod navigator;
pub mod scroll;

use leptos::prelude::*;
use portfolio_view::components::PortfolioApp;
use portfolio_view::load::LoadState;
use portfolio_view::nav::{NavState, Section, navigate};

use config::SiteConfig;
use loader::spawn_profile_load;
use navigator::DomViewport;
use scroll::track_scroll;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::default();
    let state = RwSignal::new(LoadState::default());
    let nav = RwSignal::new(NavState::default());

    spawn_profile_load(config.data_url(), state);
    track_scroll(nav);

    let on_navigate = Callback::new(move |section: Section| {
        let mut next = nav.get_untracked();
        if navigate(&mut next, &DomViewport, section) {
            nav.set(next);
        }
    });
    let on_toggle_menu = Callback::new(move |()| nav.update(NavState::toggle_menu));

    view! {
        <PortfolioApp
            state=state
            config=config.page()
            nav=nav
            on_navigate=on_navigate
            on_toggle_menu=on_toggle_menu
        />
    }
}
