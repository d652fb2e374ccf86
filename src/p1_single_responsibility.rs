// Pattern 1: Single Responsibility Principle
// Authentication and user management live in separate services, so a change
// to one concern never touches the other.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

// ============================================================================
// Authentication
// ============================================================================

/// Decides whether a username/password pair is accepted.
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Stub authenticator: every pair is accepted. Not a real credential check.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthenticationService;

impl AuthenticationService {
    pub fn new() -> Self {
        AuthenticationService
    }
}

impl Authenticator for AuthenticationService {
    fn authenticate(&self, username: &str, _password: &str) -> bool {
        debug!(username, "authenticating user");
        true
    }
}

// ============================================================================
// User management
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct UserManagementService;

impl UserManagementService {
    pub fn new() -> Self {
        UserManagementService
    }

    pub fn add_user(&self, out: &mut dyn Write, username: &str, _password: &str) -> Result<()> {
        writeln!(out, "User '{}' added.", username)?;
        Ok(())
    }

    pub fn delete_user(&self, out: &mut dyn Write, username: &str) -> Result<()> {
        writeln!(out, "User '{}' deleted.", username)?;
        Ok(())
    }
}

/// Authenticates, then adds and removes the same user on success.
pub fn run_with<A: Authenticator>(
    out: &mut dyn Write,
    auth: &A,
    users: &UserManagementService,
    username: &str,
    password: &str,
) -> Result<()> {
    if auth.authenticate(username, password) {
        writeln!(out, "User authenticated successfully.")?;
        users.add_user(out, username, password)?;
        users.delete_user(out, username)?;
    } else {
        writeln!(out, "Authentication failed.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_stub_accepts_any_credentials() {
        let auth = AuthenticationService::new();
        assert!(auth.authenticate("user1", "password1"));
        assert!(auth.authenticate("", ""));
    }

    #[test]
    fn test_user_messages() {
        let users = UserManagementService::new();
        let mut buf = Vec::new();
        users.add_user(&mut buf, "bob", "secret").unwrap();
        users.delete_user(&mut buf, "bob").unwrap();
        assert_eq!(output(buf), "User 'bob' added.\nUser 'bob' deleted.\n");
    }

    #[test]
    fn test_success_branch() {
        let mut buf = Vec::new();
        run_with(
            &mut buf,
            &AuthenticationService::new(),
            &UserManagementService::new(),
            "user1",
            "password1",
        )
        .unwrap();
        assert_eq!(
            output(buf),
            "User authenticated successfully.\nUser 'user1' added.\nUser 'user1' deleted.\n"
        );
    }

    #[test]
    fn test_failure_branch_skips_user_management() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .times(1)
            .returning(|username, _| username != "mallory");

        let mut buf = Vec::new();
        run_with(&mut buf, &auth, &UserManagementService::new(), "mallory", "guess").unwrap();
        assert_eq!(output(buf), "Authentication failed.\n");
    }
}
