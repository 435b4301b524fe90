//! Small building blocks shared by the page sections.

use leptos::prelude::*;

/// Gradient section title.
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title">
            <span class="gradient-text">{title}</span>
        </h2>
    }
}

/// Pill list, rendered in the given order.
#[component]
pub fn TagList(
    tags: Vec<String>,
    #[prop(default = "tag")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags
                .into_iter()
                .map(|tag| view! { <span class=class>{tag}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
