//! Fixed navigation bar with desktop links and a mobile drawer.

use leptos::prelude::*;

use super::{ICON_CLOSE, ICON_MENU, Icon};
use crate::nav::{NavState, Section};

/// Initials shown as the brand mark: first letter of the first two words.
pub fn brand_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn NavBar(
    /// Owner's display name, used for the brand mark
    #[prop(into)]
    name: String,
    nav: RwSignal<NavState>,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let brand = brand_initials(&name);

    let nav_class = move || {
        if nav.with(|n| n.scrolled) {
            "nav nav-scrolled"
        } else {
            "nav"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="nav-inner">
                <div class="nav-brand">{brand}</div>

                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let link_class = move || {
                                if nav.with(|n| n.active == section) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            };
                            view! {
                                <button class=link_class on:click=move |_| on_navigate.run(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| on_toggle_menu.run(())
                >
                    {move || {
                        if nav.with(|n| n.menu_open) {
                            view! { <Icon path=ICON_CLOSE /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="nav-drawer">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="nav-drawer-link" on:click=move |_| on_navigate.run(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
