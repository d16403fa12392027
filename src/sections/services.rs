use leptos::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Marketing Digital",
        description: "Campanhas de performance, mídia paga e SEO orientados a métricas reais.",
    },
    Service {
        title: "Desenvolvimento Web",
        description: "Sites e aplicações rápidos, acessíveis e fáceis de evoluir.",
    },
    Service {
        title: "Design & Branding",
        description: "Identidade visual consistente, do logotipo ao sistema de design.",
    },
    Service {
        title: "Apps Mobile",
        description: "Aplicativos iOS e Android com experiência nativa de verdade.",
    },
    Service {
        title: "E-commerce",
        description: "Lojas virtuais completas, do catálogo ao checkout.",
    },
    Service {
        title: "Consultoria",
        description: "Diagnóstico e estratégia digital para cada etapa do seu negócio.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="servicos" class="section services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"O que fazemos"</p>
                    <h2 class="section-title">"Serviços"</h2>
                    <p class="section-description">
                        "Soluções completas para presença digital, de estratégia a execução."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3 class="service-title">{service.title}</h3>
                                    <p class="service-description">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
