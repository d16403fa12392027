use leptos::prelude::*;

use crate::icons::{
    IconFacebook, IconInstagram, IconLinkedin, IconMail, IconMapPin, IconPhone, IconTwitter,
    IconZap,
};

const FOOTER_SERVICES: [&str; 6] = [
    "Marketing Digital",
    "Desenvolvimento Web",
    "Design & Branding",
    "Apps Mobile",
    "E-commerce",
    "Consultoria",
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-company">
                        <div class="brand">
                            <span class="brand-mark">
                                <IconZap />
                            </span>
                            <span class="brand-name">"Digital"<span class="brand-accent">"Agency"</span></span>
                        </div>
                        <p class="footer-blurb">
                            "Transformamos ideias em soluções digitais de sucesso. "
                            "Especialistas em marketing digital e desenvolvimento de tecnologia."
                        </p>
                        <div class="footer-social">
                            <a href="#" class="social-link" aria-label="Facebook">
                                <IconFacebook />
                            </a>
                            <a href="#" class="social-link" aria-label="Instagram">
                                <IconInstagram />
                            </a>
                            <a href="#" class="social-link" aria-label="LinkedIn">
                                <IconLinkedin />
                            </a>
                            <a href="#" class="social-link" aria-label="Twitter">
                                <IconTwitter />
                            </a>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">"Contato"</h3>
                        <div class="footer-contact">
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

                    <div class="footer-column">
                        <h3 class="footer-heading">"Serviços"</h3>
                        <ul class="footer-services">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|service| {
                                    view! {
                                        <li>
                                            <a href="#" class="footer-link">{*service}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="footer-legal">
                    <p class="footer-copyright">
                        "© 2024 Digital Agency. Todos os direitos reservados."
                    </p>
                    <div class="footer-legal-links">
                        <a href="#" class="footer-link">"Política de Privacidade"</a>
                        <a href="#" class="footer-link">"Termos de Uso"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
