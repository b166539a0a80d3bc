use crate::content::Project;
use crate::icons::Icon;
use crate::motion::Motion;
use leptos::prelude::*;

/// All project cards, top to bottom in list order.
#[component]
pub fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="container project-list">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Image with a hover overlay, then a plain title and description.
///
/// `index` only feeds the entrance stagger.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let motion = Motion::staggered(index);
    let overlay_class = format!("project-overlay {}", project.accent.css_class());
    let Project {
        id,
        title,
        description,
        image_src,
        icon,
        ..
    } = project;
    let alt = title.clone();
    let overlay_title = title.clone();
    let overlay_description = description.clone();

    view! {
        <article
            class=motion.class_with("project-card")
            style=motion.style()
            data-project-id=id.to_string()
        >
            <div class="project-media">
                <img class="project-image" src=image_src alt=alt />
                <div class=overlay_class>
                    <div class="project-overlay-heading">
                        <Icon paths=icon.paths() />
                        <h3 class="project-overlay-title">{overlay_title}</h3>
                    </div>
                    <p class="project-overlay-description">{overlay_description}</p>
                </div>
            </div>
            <div class="project-body">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
            </div>
        </article>
    }
}
