//! Demo authentication context.
//!
//! This is a mock sign-in against hardcoded credentials; there is no token,
//! no backend call and no persistence. Auth state lives in memory for the
//! duration of the page session only.

use leptos::prelude::*;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "SecurePass123!";

/// Check a username/password pair against the demo credentials.
pub fn check_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    signed_in: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            signed_in: RwSignal::new(false),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.get()
    }

    /// Attempt a sign-in. Returns `Err` with a user-facing message on
    /// invalid credentials.
    pub fn sign_in(&self, username: &str, password: &str) -> Result<(), String> {
        if check_credentials(username, password) {
            self.signed_in.set(true);
            Ok(())
        } else {
            Err("Invalid username or password".to_string())
        }
    }

    pub fn sign_out(&self) {
        self.signed_in.set(false);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the auth context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_are_the_only_valid_pair() {
        assert!(check_credentials("demo", "SecurePass123!"));
        assert!(!check_credentials("demo", "wrong"));
        assert!(!check_credentials("admin", "SecurePass123!"));
        assert!(!check_credentials("", ""));
    }

    #[test]
    fn sign_in_flips_state_only_on_success() {
        let auth = AuthContext::new();
        assert!(!auth.signed_in.get_untracked());

        assert!(auth.sign_in("demo", "nope").is_err());
        assert!(!auth.signed_in.get_untracked());

        assert!(auth.sign_in("demo", "SecurePass123!").is_ok());
        assert!(auth.signed_in.get_untracked());

        auth.sign_out();
        assert!(!auth.signed_in.get_untracked());
    }
}
