//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the status control both read the authentication flag
//! from here, and nothing else keeps a copy of it. Writes go through
//! [`Session::sign_in`] and [`Session::sign_out`] only.
//!
//! DESIGN
//! ======
//! Each transition flips the flag synchronously and then settles after a
//! short delay standing in for a credential exchange. Every transition bumps
//! an epoch; a settling operation whose epoch is no longer current reports
//! [`SessionError::Superseded`] so callers do not act on stale completions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Delay before a sign-in or sign-out completes, in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Failure outcomes of a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session changed again before this request completed")]
    Superseded,
    #[error("session is no longer available")]
    Disposed,
}

/// Authentication flag plus the epoch of the last transition.
///
/// Initial state is signed out. Nothing is persisted; a reload starts over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
    epoch: u64,
}

/// Ticket returned when a transition starts, checked again when it settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    epoch: u64,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Mark the session signed in and return the ticket for this transition.
    pub fn begin_sign_in(&mut self) -> Transition {
        self.begin(true)
    }

    /// Mark the session signed out and return the ticket for this transition.
    pub fn begin_sign_out(&mut self) -> Transition {
        self.begin(false)
    }

    /// Complete a transition started by `begin_*`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Superseded`] if another transition started
    /// after `transition` was issued.
    pub fn settle(&self, transition: Transition) -> Result<(), SessionError> {
        if transition.epoch == self.epoch { Ok(()) } else { Err(SessionError::Superseded) }
    }

    fn begin(&mut self, authenticated: bool) -> Transition {
        self.authenticated = authenticated;
        self.epoch = self.epoch.wrapping_add(1);
        Transition { epoch: self.epoch }
    }
}

/// Handle to the reactive session, shared through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct Session(RwSignal<SessionState>);

impl Session {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Create a session and provide it to all descendants.
    pub fn provide() -> Self {
        let session = Self::new();
        provide_context(session);
        session
    }

    /// Fetch the session provided by an ancestor.
    ///
    /// # Panics
    ///
    /// Panics if no ancestor called [`Session::provide`].
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Tracked read of the session state.
    pub fn with<U>(self, f: impl FnOnce(&SessionState) -> U) -> U {
        self.0.with(f)
    }

    /// Untracked copy of the current state.
    pub fn snapshot(self) -> SessionState {
        self.0.get_untracked()
    }

    /// Sign in. The flag is set before the delay starts.
    ///
    /// # Errors
    ///
    /// See [`SessionError`].
    pub async fn sign_in(self) -> Result<(), SessionError> {
        self.transition(SessionState::begin_sign_in).await
    }

    /// Sign out. The flag is cleared before the delay starts.
    ///
    /// # Errors
    ///
    /// See [`SessionError`].
    pub async fn sign_out(self) -> Result<(), SessionError> {
        self.transition(SessionState::begin_sign_out).await
    }

    async fn transition(self, begin: fn(&mut SessionState) -> Transition) -> Result<(), SessionError> {
        let ticket = self.0.try_update(begin).ok_or(SessionError::Disposed)?;
        settle_delay().await;
        self.0
            .try_with_untracked(|state| state.settle(ticket))
            .ok_or(SessionError::Disposed)?
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
async fn settle_delay() {
    gloo_timers::future::TimeoutFuture::new(SETTLE_DELAY_MS).await;
}

// No timer outside the browser; completion is immediate.
#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
async fn settle_delay() {}
