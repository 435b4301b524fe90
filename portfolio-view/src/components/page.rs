//! Top-level composition: loading screen or full page.

use std::sync::Arc;

use leptos::prelude::*;

use super::{About, Contact, ExperienceSection, Footer, Hero, NavBar, Projects};
use crate::PageConfig;
use crate::load::LoadState;
use crate::nav::{NavState, Section};
use crate::types::Profile;

/// Full-screen placeholder shown until the profile arrives.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status">
            <div class="loading-text">"Loading..."</div>
        </div>
    }
}

/// Every section of the portfolio for a loaded profile.
#[component]
pub fn PortfolioPage(
    profile: Arc<Profile>,
    config: PageConfig,
    nav: RwSignal<NavState>,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let personal = profile.personal.clone();

    view! {
        <div class="page">
            <NavBar
                name=personal.name.clone()
                nav=nav
                on_navigate=on_navigate
                on_toggle_menu=on_toggle_menu
            />
            <main>
                <Hero personal=personal.clone() avatar_src=config.avatar_src on_navigate=on_navigate />
                <About
                    education=profile.education.clone()
                    awards=profile.awards.clone()
                    skills=profile.skills.clone()
                />
                <ExperienceSection experience=profile.experience.clone() />
                <Projects projects=profile.projects.clone() />
                <Contact personal=personal.clone() />
            </main>
            <Footer name=personal.name year=config.copyright_year />
        </div>
    }
}

/// Shows [`Loading`] until `state` is ready, then the page.
///
/// Nothing but the loading screen is reachable while the profile is unset.
#[component]
pub fn PortfolioApp(
    #[prop(into)]
    state: Signal<LoadState>,
    config: PageConfig,
    nav: RwSignal<NavState>,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    move || match state.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Ready(profile) => view! {
            <PortfolioPage
                profile=profile
                config=config.clone()
                nav=nav
                on_navigate=on_navigate
                on_toggle_menu=on_toggle_menu
            />
        }
        .into_any(),
    }
}
