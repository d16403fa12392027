// Home page - hero plus the anchored content sections
use crate::sections::{About, Contact, HeroSection, Portfolio, Services};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <Services />
        <Portfolio />
        <About />
        <Contact />
    }
}
