/// A screen the app can show. Carries at most one string parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page shown while the app starts.
    Index,
    Login,
    Register,
    Home { user: Option<String> },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Login => "login",
            Route::Register => "register",
            Route::Home { .. } => "home",
        }
    }

    pub fn param(&self) -> Option<&str> {
        match self {
            Route::Home { user } => user.as_deref(),
            _ => None,
        }
    }

    /// Inverse of `name()`/`param()`. Unknown names, and parameters on
    /// routes that take none, yield `None`.
    pub fn parse(name: &str, param: Option<&str>) -> Option<Route> {
        match (name, param) {
            ("index", None) => Some(Route::Index),
            ("login", None) => Some(Route::Login),
            ("register", None) => Some(Route::Register),
            ("home", user) => Some(Route::Home {
                user: user.map(str::to_string),
            }),
            _ => None,
        }
    }
}

/// Replace-only navigation: there is no back stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Index,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn replace(&mut self, route: Route) {
        tracing::debug!(from = self.current.name(), to = route.name(), "navigate");
        self.current = route;
    }

    /// Move on from the landing page to the login screen.
    pub fn leave_landing(&mut self) {
        if self.current == Route::Index {
            self.replace(Route::Login);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
