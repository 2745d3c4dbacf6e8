/// Navigation targets. `SignIn` is the only unauthenticated entry point;
/// everything else belongs to the authenticated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    Home,
    Clubs,
    AddClub,
    Users,
    Plans,
    Sports,
    Transactions,
}

impl Route {
    /// Parse a navigation path. Unknown paths land on `Home`.
    pub fn from_path(path: &str) -> Self {
        let normalized = path.trim().trim_matches('/').to_lowercase();
        match normalized.as_str() {
            "sign-in" => Route::SignIn,
            "clubs-management/clubs" | "clubs" => Route::Clubs,
            "clubs-management/add-club" | "add-club" => Route::AddClub,
            "users" => Route::Users,
            "plans" | "clubs-management/plans" => Route::Plans,
            "sports" => Route::Sports,
            "transactions" => Route::Transactions,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/sign-in",
            Route::Home => "/Home",
            Route::Clubs => "/Clubs-Management/Clubs",
            Route::AddClub => "/Clubs-Management/Add-Club",
            Route::Users => "/users",
            Route::Plans => "/plans",
            Route::Sports => "/sports",
            Route::Transactions => "/transactions",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::SignIn)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_known_routes() {
        assert_eq!(Route::from_path("/sign-in"), Route::SignIn);
        assert_eq!(Route::from_path("/Home"), Route::Home);
        assert_eq!(Route::from_path("/Clubs-Management/Clubs"), Route::Clubs);
        assert_eq!(Route::from_path("/clubs-management/add-club/"), Route::AddClub);
        assert_eq!(Route::from_path("users"), Route::Users);
        assert_eq!(Route::from_path("/PLANS"), Route::Plans);
        assert_eq!(Route::from_path("/sports"), Route::Sports);
        assert_eq!(Route::from_path("/transactions"), Route::Transactions);
    }

    #[test]
    fn test_from_path_unknown_goes_home() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/does/not/exist"), Route::Home);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [
            Route::SignIn,
            Route::Home,
            Route::Clubs,
            Route::AddClub,
            Route::Users,
            Route::Plans,
            Route::Sports,
            Route::Transactions,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert!(!Route::SignIn.requires_auth());
        assert!(Route::Users.requires_auth());
    }
}
