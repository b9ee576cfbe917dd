use std::fmt;

use crate::error::{MenuError, MenuResult};

/// Screens of the application, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Add,
    View,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Add => "/add",
            Route::View => "/view",
        }
    }

    pub fn can_navigate_to(self, to: Route) -> bool {
        matches!(
            (self, to),
            (Route::Home, Route::Add)
                | (Route::Home, Route::View)
                | (Route::Add, Route::View)
                | (Route::Add, Route::Home)
                | (Route::View, Route::Home)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current screen and enforces the navigation graph.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, to: Route) -> MenuResult<()> {
        let from = self.current;
        if !from.can_navigate_to(to) {
            tracing::warn!(%from, %to, "rejected navigation");
            return Err(MenuError::InvalidTransition { from, to });
        }
        tracing::info!(%from, %to, "navigate");
        self.current = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(Router::new().current(), Route::Home);
    }

    #[test]
    fn follows_allowed_edges() {
        let mut router = Router::new();
        router.navigate(Route::Add).unwrap();
        router.navigate(Route::View).unwrap();
        router.navigate(Route::Home).unwrap();
        router.navigate(Route::View).unwrap();
        assert_eq!(router.current(), Route::View);
    }

    #[test]
    fn rejects_view_to_add() {
        let mut router = Router::new();
        router.navigate(Route::View).unwrap();
        assert_eq!(
            router.navigate(Route::Add),
            Err(MenuError::InvalidTransition {
                from: Route::View,
                to: Route::Add
            })
        );
        assert_eq!(router.current(), Route::View);
    }

    #[test]
    fn self_loops_are_not_edges() {
        for route in [Route::Home, Route::Add, Route::View] {
            assert!(!route.can_navigate_to(route));
        }
    }

    #[test]
    fn routes_display_as_paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Add.to_string(), "/add");
        assert_eq!(Route::View.to_string(), "/view");
    }
}
