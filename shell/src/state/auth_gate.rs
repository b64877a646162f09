//! Auth-loader state machine.
//!
//! DESIGN
//! ======
//! Two independent producers write one boolean, "auth loader" (`true` while
//! the session is not confirmed authenticated):
//!
//! - the reactive path runs whenever the user identity changes and only looks
//!   at the user;
//! - the poll path runs on a timer and also honors the `signIn` query
//!   override.
//!
//! The two can disagree for the same session. Neither reconciles the other;
//! the last write wins until the next write.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

/// Which producer wrote the flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthGatePath {
    Reactive,
    Poll,
}

/// One write to the auth-loader flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthGateWrite {
    pub path: AuthGatePath,
    pub value: bool,
}

/// Auth-loader flag with the last write that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthGate {
    auth_loader: bool,
    last_write: Option<AuthGateWrite>,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self { auth_loader: true, last_write: None }
    }
}

impl AuthGate {
    /// `true` until some path confirms the session as authenticated.
    #[must_use]
    pub fn auth_loader(&self) -> bool {
        self.auth_loader
    }

    #[must_use]
    pub fn last_write(&self) -> Option<AuthGateWrite> {
        self.last_write
    }

    /// Reactive path: the user identity changed. Ignores the query override.
    pub fn on_user_changed(&mut self, user_present: bool) -> AuthGateWrite {
        self.write(AuthGatePath::Reactive, !user_present)
    }

    /// Poll path: a timer tick. The sign-in override counts as authenticated.
    pub fn on_poll_tick(&mut self, user_present: bool, sign_in_mode: bool) -> AuthGateWrite {
        let is_authenticated = user_present || sign_in_mode;
        self.write(AuthGatePath::Poll, !is_authenticated)
    }

    fn write(&mut self, path: AuthGatePath, value: bool) -> AuthGateWrite {
        let write = AuthGateWrite { path, value };
        self.auth_loader = value;
        self.last_write = Some(write);
        write
    }
}

/// Poll period for the auth timer, or `None` when polling is disabled.
#[must_use]
pub fn poll_period_ms(wait_before_login: u32) -> Option<u32> {
    (wait_before_login > 0).then_some(wait_before_login)
}
