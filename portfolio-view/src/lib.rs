//! # portfolio-view
//!
//! Data model, navigation state and Leptos components for a single-page
//! portfolio.
//!
//! The crate is browser-agnostic: components take the profile and signals
//! as props and report clicks through callbacks. `portfolio-site` mounts
//! them client-side; [`render_page`] renders the same tree to static HTML.
//!
//! ## Architecture
//!
//! - [`types`] - Profile document deserialized from `portfolio-data.json`
//! - [`load`] - One-shot load state and [`load::ProfileLoadFailure`]
//! - [`nav`] - Sections, navigation state and the [`nav::Viewport`] seam
//! - [`components`] - Leptos UI components
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_view::{render_page, PageConfig, load::parse_profile, nav::NavState};
//!
//! let profile = parse_profile(r#"{
//!     "personal": {
//!         "name": "Ada Lovelace", "subtitle": "Analyst", "bio": "Notes.",
//!         "email": "ada@example.org", "email2": "ada@work.example.org",
//!         "github": "https://github.com/ada", "linkedin": "https://linkedin.com/in/ada"
//!     },
//!     "education": [], "awards": [], "skills": {},
//!     "experience": [], "projects": []
//! }"#).unwrap();
//!
//! let html = render_page(&profile, &NavState::default(), &PageConfig::default());
//! assert!(html.contains("Ada Lovelace"));
//! ```

#![recursion_limit = "256"]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod load;
pub mod nav;
pub mod types;

/// Presentation settings that do not come from the profile document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Avatar image URL
    pub avatar_src: String,
    /// Year shown in the footer
    pub copyright_year: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            avatar_src: "avatar.jpeg".into(),
            copyright_year: 2025,
        }
    }
}

#[cfg(feature = "ssr")]
mod render {
    use std::sync::Arc;

    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use crate::PageConfig;
    use crate::components::{Loading, PortfolioApp, PortfolioPage};
    use crate::load::LoadState;
    use crate::nav::{NavState, Section};
    use crate::types::Profile;

    /// Render the full page for `profile` as static HTML.
    ///
    /// Navigation controls render but do nothing without a host.
    pub fn render_page(profile: &Profile, nav: &NavState, config: &PageConfig) -> String {
        let nav = RwSignal::new(*nav);
        let view = view! {
            <PortfolioPage
                profile=Arc::new(profile.clone())
                config=config.clone()
                nav=nav
                on_navigate=Callback::new(|_: Section| {})
                on_toggle_menu=Callback::new(|_: ()| {})
            />
        };
        view.to_html()
    }

    /// Render the loading screen as static HTML.
    pub fn render_loading() -> String {
        view! { <Loading /> }.to_html()
    }

    /// Render whatever the app shows for `state`.
    pub fn render_app(state: &LoadState, config: &PageConfig) -> String {
        let state = RwSignal::new(state.clone());
        let view = view! {
            <PortfolioApp
                state=state
                config=config.clone()
                nav=RwSignal::new(NavState::default())
                on_navigate=Callback::new(|_: Section| {})
                on_toggle_menu=Callback::new(|_: ()| {})
            />
        };
        view.to_html()
    }
}

#[cfg(feature = "ssr")]
pub use render::{render_app, render_loading, render_page};
