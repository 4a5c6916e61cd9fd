//! Path resolution and the session guard.

use std::fmt;

use crate::session::SessionState;

/// The three screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Pix,
}

impl Route {
    /// Returns the canonical path of this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::Pix => "/pix",
        }
    }

    /// Match a path exactly against the known routes.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/pix" => Some(Route::Pix),
            _ => None,
        }
    }

    /// Returns true if the route requires a session token.
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Pix)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the shell should do with a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Mount the screen for this route.
    Mount(Route),
    /// Replace the location with this route.
    Redirect(Route),
}

impl Resolution {
    /// Returns the route that ends up on screen.
    pub fn route(self) -> Route {
        match self {
            Resolution::Mount(route) | Resolution::Redirect(route) => route,
        }
    }
}

/// Resolve a requested path against the session.
///
/// Protected routes need a token to be present; whether the backend still
/// accepts it is checked by the screen itself. Unknown paths go to login.
pub fn resolve(path: &str, session: &SessionState) -> Resolution {
    match Route::from_path(path) {
        Some(route) if route.is_protected() && !session.is_authenticated() => {
            Resolution::Redirect(Route::Login)
        }
        Some(route) => Resolution::Mount(route),
        None => Resolution::Redirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionToken;

    fn authenticated() -> SessionState {
        SessionState::Authenticated {
            token: SessionToken::new("t").unwrap(),
        }
    }

    #[test]
    fn public_routes_mount_without_session() {
        let anon = SessionState::Anonymous;
        assert_eq!(resolve("/", &anon), Resolution::Mount(Route::Login));
        assert_eq!(resolve("/register", &anon), Resolution::Mount(Route::Register));
    }

    #[test]
    fn protected_route_redirects_without_token() {
        assert_eq!(
            resolve("/pix", &SessionState::Anonymous),
            Resolution::Redirect(Route::Login)
        );
    }

    #[test]
    fn protected_route_mounts_with_token() {
        assert_eq!(resolve("/pix", &authenticated()), Resolution::Mount(Route::Pix));
    }

    #[test]
    fn unknown_paths_redirect_to_login() {
        for path in ["/admin", "/pix/extra", "pix", "/registerx"] {
            assert_eq!(
                resolve(path, &authenticated()),
                Resolution::Redirect(Route::Login),
                "{path}"
            );
        }
    }

    #[test]
    fn ignores_trailing_slash_query_and_fragment() {
        let auth = authenticated();
        assert_eq!(resolve("/pix/", &auth), Resolution::Mount(Route::Pix));
        assert_eq!(resolve("/register?ref=x", &auth), Resolution::Mount(Route::Register));
        assert_eq!(resolve("/#top", &auth), Resolution::Mount(Route::Login));
    }

    #[test]
    fn paths_roundtrip() {
        for route in [Route::Login, Route::Register, Route::Pix] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
