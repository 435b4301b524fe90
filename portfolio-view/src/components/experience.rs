use leptos::prelude::*;

use super::{ICON_MAP_PIN, Icon, SectionHeading, TagList};
use crate::nav::Section;
use crate::types::Experience;

/// Work history, in document order.
#[component]
pub fn ExperienceSection(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor() class="section section-alt">
            <div class="container">
                <SectionHeading title="Experience" />
                <div class="timeline">
                    {experience
                        .into_iter()
                        .map(|exp| view! { <ExperienceCard exp=exp /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(exp: Experience) -> impl IntoView {
    view! {
        <article class="card experience-card" data-id=exp.id.0>
            <div class="entry-header">
                <div>
                    <h3 class="entry-title">{exp.title}</h3>
                    <p class="entry-org">{exp.company}</p>
                    <p class="entry-location">
                        <Icon path=ICON_MAP_PIN size="16" />
                        <span>{exp.location}</span>
                    </p>
                </div>
                <span class="entry-dates">{format!("{} - {}", exp.start_date, exp.end_date)}</span>
            </div>

            <ul class="experience-points">
                {exp.description
                    .into_iter()
                    .map(|point| {
                        view! {
                            <li>
                                <span class="bullet">"▹"</span>
                                <span>{point}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <TagList tags=exp.technologies />
        </article>
    }
}
