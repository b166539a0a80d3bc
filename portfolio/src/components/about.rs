use crate::content::AboutContent;
use crate::motion::Motion;
use leptos::prelude::*;

#[component]
pub fn About(about: AboutContent) -> impl IntoView {
    let motion = Motion::rise(800).in_view();
    view! {
        <section id="about" class="about">
            <div class=motion.class_with("about-inner") style=motion.style()>
                <h2 class="about-heading">{about.heading}</h2>
                <p class="about-body">{about.body}</p>
                <div class="skill-tags">
                    {about
                        .skills
                        .into_iter()
                        .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
