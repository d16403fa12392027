use leptos::prelude::*;

use crate::icons::{IconMail, IconMapPin, IconPhone};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contato" class="section contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Vamos conversar"</p>
                    <h2 class="section-title">"Contato"</h2>
                    <p class="section-description">
                        "Conte sua ideia e a gente responde em até um dia útil."
                    </p>
                </div>
                <div class="contact-rows">
                    <div class="contact-row">
                        <IconPhone />
                        <span>"+55 (11) 9999-9999"</span>
                    </div>
                    <div class="contact-row">
                        <IconMail />
                        <span>"contato@agencia.com"</span>
                    </div>
                    <div class="contact-row">
                        <IconMapPin />
                        <span>"São Paulo, SP - Brasil"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
