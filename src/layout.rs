//! Page chrome: fixed header with in-page navigation, content slot, footer.

use leptos::prelude::*;

use crate::icons::{IconClose, IconMenu, IconZap};
use crate::pages::page_url;
use crate::scroll::{DomScroller, MenuState};
use crate::sections::Footer;

/// One entry of the header navigation.
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Rendered in order; labels double as render keys and must stay unique.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Início", anchor: "#hero" },
    NavItem { label: "Serviços", anchor: "#servicos" },
    NavItem { label: "Portfolio", anchor: "#portfolio" },
    NavItem { label: "Sobre", anchor: "#sobre" },
    NavItem { label: "Contato", anchor: "#contato" },
];

/// Persistent chrome around the page body. Owns the single piece of UI
/// state on the page: whether the mobile menu is expanded.
#[component]
pub fn Layout(
    children: Children,
    /// Logical name of the page in the slot. Nothing branches on it yet;
    /// exposed as a data attribute for styling and analytics hooks.
    #[prop(optional)] current_page: &'static str,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    let go = move |href: &'static str| {
        menu.update(|m| {
            m.navigate(&DomScroller, href);
        });
    };

    view! {
        <div class="page" data-page=current_page>
            <header class="header">
                <nav class="nav-inner">
                    <a href=page_url("Home") class="brand">
                        <span class="brand-mark">
                            <IconZap />
                        </span>
                        <span class="brand-name">"Digital"<span class="brand-accent">"Agency"</span></span>
                    </a>

                    // Desktop navigation
                    <div class="nav-desktop">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let anchor = item.anchor;
                                view! {
                                    <button class="nav-link" on:click=move |_| go(anchor)>
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn btn-cta">"Começar Projeto"</button>
                    </div>

                    // Hamburger, narrow viewports only
                    <button
                        class="nav-toggle"
                        aria-label="Abrir menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(|m| m.toggle())
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <IconClose /> }.into_any()
                            } else {
                                view! { <IconMenu /> }.into_any()
                            }
                        }}
                    </button>
                </nav>

                <Show when=move || menu.get().is_open()>
                    <div class="nav-mobile">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let anchor = item.anchor;
                                view! {
                                    <button class="nav-mobile-link" on:click=move |_| go(anchor)>
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <div class="nav-mobile-cta">
                            <button class="btn btn-cta">"Começar Projeto"</button>
                        </div>
                    </div>
                </Show>
            </header>

            <main>
                // First anchor target wraps the slotted page body
                <div id="hero">{children()}</div>
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::anchor_id;
    use std::collections::HashSet;

    #[test]
    fn nav_renders_exactly_five_items_in_fixed_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            ["Início", "Serviços", "Portfolio", "Sobre", "Contato"]
        );
    }

    #[test]
    fn nav_labels_are_unique_render_keys() {
        let unique: HashSet<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(unique.len(), NAV_ITEMS.len());
    }

    #[test]
    fn every_nav_item_targets_an_in_page_anchor() {
        for item in &NAV_ITEMS {
            assert!(
                anchor_id(item.anchor).is_some(),
                "{} must carry the anchor marker",
                item.label
            );
        }
    }
}
