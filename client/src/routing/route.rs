//! Route table.

use std::fmt;

/// Client routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    Home,
    Balance,
    Deposit,
    Withdraw,
    Transfer,
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only for signed-out users
    Public,
    /// Only for signed-in users
    Protected,
}

/// Navigation target: a known route or anything else (the `*` route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Known(Route),
    Unmatched(String),
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::SignIn,
            Route::SignUp,
            Route::Home,
            Route::Balance,
            Route::Deposit,
            Route::Withdraw,
            Route::Transfer,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/auth/signin",
            Route::SignUp => "/auth/signup",
            Route::Home => "/",
            Route::Balance => "/balance",
            Route::Deposit => "/deposit",
            Route::Withdraw => "/withdraw",
            Route::Transfer => "/transfer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Home => "Home",
            Route::Balance => "Balance",
            Route::Deposit => "Deposit",
            Route::Withdraw => "Withdraw",
            Route::Transfer => "Transfer",
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Route::SignIn | Route::SignUp => Visibility::Public,
            Route::Home | Route::Balance | Route::Deposit | Route::Withdraw | Route::Transfer => {
                Visibility::Protected
            }
        }
    }

    /// Match a path. Case-insensitive, trailing slashes and query/fragment ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_ascii_lowercase()
        } else {
            format!("/{}", trimmed.to_ascii_lowercase())
        };

        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Target {
    pub fn parse(path: &str) -> Self {
        match Route::from_path(path) {
            Some(route) => Target::Known(route),
            None => Target::Unmatched(path.to_string()),
        }
    }
}

impl From<Route> for Target {
    fn from(route: Route) -> Self {
        Target::Known(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn test_path_matching_is_lenient() {
        assert_eq!(Route::from_path("/auth/signIn"), Some(Route::SignIn));
        assert_eq!(Route::from_path("/Deposit/"), Some(Route::Deposit));
        assert_eq!(Route::from_path("transfer"), Some(Route::Transfer));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/withdraw?amount=5"), Some(Route::Withdraw));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_visibility_classes() {
        let public: Vec<Route> = Route::all()
            .iter()
            .copied()
            .filter(|r| r.visibility() == Visibility::Public)
            .collect();
        assert_eq!(public, vec![Route::SignIn, Route::SignUp]);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!(Target::parse("/"), Target::Known(Route::Home));
        assert_eq!(Target::parse("/admin"), Target::Unmatched("/admin".to_string()));
    }
}
