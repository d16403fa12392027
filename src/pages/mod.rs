// Landing page routes

mod home;

pub use home::HomePage;

/// Resolves a logical page name into a navigable path for the router.
pub fn page_url(name: &str) -> String {
    match name {
        "Home" => "/".to_owned(),
        other => format!("/{}", other.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_resolves_to_the_root_path() {
        assert_eq!(page_url("Home"), "/");
    }

    #[test]
    fn other_pages_resolve_to_lowercase_slugs() {
        assert_eq!(page_url("Portfolio"), "/portfolio");
        assert_eq!(page_url("Contato"), "/contato");
    }
}
