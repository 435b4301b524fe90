use leptos::prelude::*;

use super::{ICON_CODE, ICON_EXTERNAL_LINK, ICON_GITHUB, Icon, SectionHeading, TagList};
use crate::nav::Section;
use crate::types::Project;

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="section">
            <div class="container">
                <SectionHeading title="Featured Projects" />
                <div class="card-grid two-columns">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project-card" data-id=project.id.0>
            <div class="project-card-header">
                <Icon path=ICON_CODE size="32" class="card-icon" />
                <span class="project-category">{project.category}</span>
            </div>

            <h3 class="entry-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>

            <TagList tags=project.technologies class="tag tag-small" />

            <div class="project-links">
                <a href=project.github_link target="_blank" class="project-link">
                    <Icon path=ICON_GITHUB size="18" />
                    <span>"Code"</span>
                </a>
                <a href=project.demo_link target="_blank" class="project-link">
                    <Icon path=ICON_EXTERNAL_LINK size="18" />
                    <span>"Demo"</span>
                </a>
            </div>
        </article>
    }
}
