use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("120+", "Projetos entregues"),
    ("8 anos", "De mercado"),
    ("97%", "Clientes satisfeitos"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="section about">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Quem somos"</p>
                    <h2 class="section-title">"Sobre a agência"</h2>
                    <p class="section-description">
                        "Um time de estrategistas, designers e engenheiros que transforma "
                        "ideias em soluções digitais de sucesso desde 2016."
                    </p>
                </div>
                <div class="about-stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="about-stat">
                                    <span class="about-stat-value">{*value}</span>
                                    <span class="about-stat-label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
