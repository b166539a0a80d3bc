use crate::content::HeroContent;
use crate::motion::Motion;
use leptos::prelude::*;

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let motion = Motion::rise(800);
    view! {
        <section id="home" class="hero">
            <div class=motion.class_with("container") style=motion.style()>
                <h1 class="hero-title">
                    <span>{hero.greeting}" "</span>
                    <span class="hero-role">{hero.role}</span>
                </h1>
                <p class="hero-bio">{hero.bio}</p>
            </div>
        </section>
    }
}
