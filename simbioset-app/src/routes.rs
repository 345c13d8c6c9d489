//! Route table mapping URL paths to pages.

/// Pages of the application. Two of them defer loading their module until
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    KnowledgeTree,
    Search,
    Projects,
    Funding,
    About,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::KnowledgeTree,
            Route::Search,
            Route::Projects,
            Route::Funding,
            Route::About,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::KnowledgeTree => "/tree",
            Route::Search => "/search",
            Route::Projects => "/projects",
            Route::Funding => "/funding",
            Route::About => "/about",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::all().iter().copied().find(|r| r.path() == path)
    }

    /// Canonical page title (translated through the i18n store by callers).
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::KnowledgeTree => "Árbol de conocimiento",
            Route::Search => "Búsqueda",
            Route::Projects => "Proyectos",
            Route::Funding => "Financiamiento",
            Route::About => "Acerca de",
        }
    }

    /// Whether this page's module is fetched only on navigation.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Route::Projects | Route::About)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn unknown_path_has_no_route() {
        assert_eq!(Route::from_path("/missing"), None);
    }

    #[test]
    fn exactly_two_routes_are_deferred() {
        let deferred = Route::all().iter().filter(|r| r.is_deferred()).count();
        assert_eq!(deferred, 2);
    }
}
