use leptos::prelude::*;

struct Project {
    name: &'static str,
    category: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project { name: "Loja Aurora", category: "E-commerce" },
    Project { name: "Banco Vetor", category: "App Mobile" },
    Project { name: "Clínica Vida+", category: "Site Institucional" },
    Project { name: "Festival Onda", category: "Campanha Digital" },
];

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="section portfolio">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Cases selecionados"</p>
                    <h2 class="section-title">"Portfolio"</h2>
                </div>
                <div class="portfolio-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="portfolio-card">
                                    <div class="portfolio-thumb" aria-hidden="true"></div>
                                    <h3 class="portfolio-name">{project.name}</h3>
                                    <p class="portfolio-category">{project.category}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
