use leptos::prelude::*;

use super::{ICON_CHEVRON_DOWN, ICON_GITHUB, ICON_LINKEDIN, ICON_MAIL, Icon};
use crate::nav::Section;
use crate::types::Personal;

#[component]
pub fn Hero(
    personal: Personal,
    /// Avatar image URL
    #[prop(into)]
    avatar_src: String,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    let mailto = format!("mailto:{}", personal.email);

    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="container hero-content">
                <img class="hero-avatar" src=avatar_src alt=personal.name.clone() />
                <h1 class="hero-title">{personal.name}</h1>
                <p class="hero-subtitle">{personal.subtitle}</p>
                <p class="hero-bio">{personal.bio}</p>

                <div class="hero-links">
                    <a href=personal.github target="_blank" rel="noopener noreferrer" class="icon-link" aria-label="GitHub">
                        <Icon path=ICON_GITHUB />
                    </a>
                    <a href=personal.linkedin target="_blank" rel="noopener noreferrer" class="icon-link" aria-label="LinkedIn">
                        <Icon path=ICON_LINKEDIN />
                    </a>
                    <a href=mailto class="icon-link" aria-label="Email">
                        <Icon path=ICON_MAIL />
                    </a>
                </div>

                <button class="btn btn-primary" on:click=move |_| on_navigate.run(Section::Projects)>
                    "View My Work"
                </button>

                <div class="hero-scroll-cue">
                    <Icon path=ICON_CHEVRON_DOWN size="32" />
                </div>
            </div>
        </section>
    }
}
