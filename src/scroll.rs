//! In-page anchor navigation and the mobile menu state machine.
//!
//! The scroll side effect lives behind [`ScrollTarget`] so the
//! close-menu-after-navigate rule can be exercised without a browser.

/// Prefix distinguishing an in-page anchor from a routable href.
const ANCHOR_MARKER: char = '#';

/// Extracts the element id from an anchor href.
///
/// Returns `None` when the marker is missing or the remainder is empty,
/// in which case navigation is a pure menu-closing side effect.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix(ANCHOR_MARKER).filter(|id| !id.is_empty())
}

/// Capability to scroll an element into view by id.
pub trait ScrollTarget {
    /// Returns whether an element with `id` was found.
    fn scroll_to_element(&self, id: &str) -> bool;
}

/// Browser-backed scroller. A missing target is a silent no-op so a broken
/// internal link never takes the page down.
pub struct DomScroller;

impl ScrollTarget for DomScroller {
    fn scroll_to_element(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Open/closed flag for the collapsed navigation on narrow viewports.
///
/// Two states, two transitions: a user toggle flips it, any navigation
/// forces it closed. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Scrolls to `href` when it names an in-page anchor, then closes the
    /// menu regardless of the outcome. Returns whether a target was found.
    pub fn navigate<S: ScrollTarget>(&mut self, scroller: &S, href: &str) -> bool {
        let found = match anchor_id(href) {
            Some(id) => scroller.scroll_to_element(id),
            None => false,
        };
        self.open = false;
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records scroll requests instead of touching a DOM.
    struct FakeDom {
        ids: &'static [&'static str],
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDom {
        fn with_ids(ids: &'static [&'static str]) -> Self {
            Self {
                ids,
                scrolled: RefCell::new(Vec::new()),
            }
        }

        fn scrolled(&self) -> Vec<String> {
            self.scrolled.borrow().clone()
        }
    }

    impl ScrollTarget for FakeDom {
        fn scroll_to_element(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_owned());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn anchor_id_strips_the_marker() {
        assert_eq!(anchor_id("#contato"), Some("contato"));
        assert_eq!(anchor_id("#hero"), Some("hero"));
    }

    #[test]
    fn anchor_id_rejects_plain_hrefs_and_a_bare_marker() {
        assert_eq!(anchor_id("/portfolio"), None);
        assert_eq!(anchor_id("contato"), None);
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn toggles_alternate_deterministically() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        for round in 1..=6 {
            menu.toggle();
            assert_eq!(menu.is_open(), round % 2 == 1);
        }
    }

    #[test]
    fn navigate_closes_the_menu_from_any_prior_state() {
        let dom = FakeDom::with_ids(&["contato"]);
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.toggle();
            }
            menu.navigate(&dom, "#contato");
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn navigate_without_marker_never_reaches_the_scroller() {
        let dom = FakeDom::with_ids(&["contato"]);
        let mut menu = MenuState::default();
        menu.toggle();
        let found = menu.navigate(&dom, "/outra-pagina");
        assert!(!found);
        assert!(dom.scrolled().is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn navigate_to_a_missing_anchor_is_a_silent_noop() {
        let dom = FakeDom::with_ids(&["hero", "servicos"]);
        let mut menu = MenuState::default();
        let found = menu.navigate(&dom, "#inexistente");
        assert!(!found);
        assert!(dom.scrolled().is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn navigate_scrolls_a_matching_element_into_view() {
        let dom = FakeDom::with_ids(&["hero", "servicos", "contato"]);
        let mut menu = MenuState::default();
        menu.toggle();
        let found = menu.navigate(&dom, "#contato");
        assert!(found);
        assert_eq!(dom.scrolled(), vec!["contato".to_owned()]);
        assert!(!menu.is_open());
    }
}
