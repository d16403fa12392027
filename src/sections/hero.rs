//! Full-viewport banner. Stateless: a pure render of static content with
//! CSS-driven entrance and ambient animations.

use leptos::prelude::*;

use crate::icons::{IconArrowRight, IconSparkles, IconZap};

/// Hero banner with the primary and secondary calls to action.
///
/// The two buttons carry no behavior of their own; the host page may wire
/// them through the optional callbacks.
#[component]
pub fn HeroSection(
    #[prop(optional, into)] on_primary: Option<Callback<()>>,
    #[prop(optional, into)] on_secondary: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <section class="hero">
            // Ambient blurred blobs drifting behind the copy
            <div class="hero-pattern" aria-hidden="true">
                <div class="hero-blob blob-purple"></div>
                <div class="hero-blob blob-yellow"></div>
                <div class="hero-blob blob-pink"></div>
            </div>

            <div class="hero-inner hero-enter">
                <div class="hero-badge">
                    <IconSparkles />
                    "Agência #1 em Resultados"
                </div>

                <h1 class="hero-title">
                    "Transformamos"
                    <span class="hero-title-accent">"Ideias em Sucesso"</span>
                </h1>

                <p class="hero-description">
                    "Somos especialistas em marketing digital e desenvolvimento de tecnologia. "
                    "Criamos estratégias personalizadas que geram resultados reais para o seu negócio."
                </p>

                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            if let Some(cb) = on_primary {
                                cb.run(());
                            }
                        }
                    >
                        "Começar Agora"
                        <IconArrowRight />
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| {
                            if let Some(cb) = on_secondary {
                                cb.run(());
                            }
                        }
                    >
                        "Ver Portfolio"
                    </button>
                </div>

                <div class="hero-float" aria-hidden="true">
                    <IconZap />
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_renders_without_any_props() {
        // Stateless component: constructible with nothing injected
        let _ = HeroSection;
    }
}
