//! About section: education and awards cards, then the skills grid.

use leptos::prelude::*;

use super::{ICON_AWARD, ICON_GRADUATION_CAP, ICON_STAR, Icon, SectionHeading, TagList};
use crate::nav::Section;
use crate::types::{Award, Education, Skills};

#[component]
pub fn About(education: Vec<Education>, awards: Vec<Award>, skills: Skills) -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="section">
            <div class="container">
                <SectionHeading title="About Me" />

                <div class="card-grid two-columns">
                    <EducationCard education=education />
                    <AwardsCard awards=awards />
                </div>

                <SkillsGrid skills=skills />
            </div>
        </section>
    }
}

#[component]
fn EducationCard(education: Vec<Education>) -> impl IntoView {
    view! {
        <div class="card">
            <Icon path=ICON_GRADUATION_CAP size="32" class="card-icon" />
            <h3 class="card-title">"Education"</h3>
            {education
                .into_iter()
                .map(|edu| {
                    view! {
                        <div class="education-entry" data-id=edu.id.0>
                            <div class="entry-header">
                                <h4 class="entry-title">{edu.degree}</h4>
                                <span class="entry-dates">
                                    {format!("{} - {}", edu.start_date, edu.end_date)}
                                </span>
                            </div>
                            <p class="entry-org">{edu.institution}</p>
                            <p class="entry-status">{edu.status}</p>
                            {edu.thesis.map(|thesis| {
                                view! { <p class="entry-thesis">{format!("Thesis: {}", thesis)}</p> }
                            })}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn AwardsCard(awards: Vec<Award>) -> impl IntoView {
    view! {
        <div class="card">
            <Icon path=ICON_AWARD size="32" class="card-icon" />
            <h3 class="card-title">"Awards & Recognition"</h3>
            {awards
                .into_iter()
                .map(|award| {
                    view! {
                        <div class="award-entry">
                            <Icon path=ICON_STAR size="20" class="award-star" />
                            <div>
                                <p class="entry-title">{award.title}</p>
                                <p class="entry-dates">{award.date}</p>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SkillsGrid(skills: Skills) -> impl IntoView {
    view! {
        <div class="card skills-card">
            <h3 class="card-title">"Technical Skills"</h3>
            <div class="skills-grid">
                {skills
                    .categories()
                    .iter()
                    .cloned()
                    .map(|category| {
                        view! {
                            <div class="skill-category">
                                <h4 class="skill-category-name">{category.name}</h4>
                                <TagList tags=category.skills />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
