//! Login page with a single sign-in action.
//!
//! After sign-in completes the page redirects to the origin carried in the
//! `from` query parameter, or to `/` when the page was opened directly.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;

use crate::routing::FROM_PARAM;
use crate::routing::guard::replace_history;
use crate::routing::origin::Origin;
use crate::state::session::{Session, SessionError};

/// Local state of one login page instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    AwaitingInput,
    Pending,
    Redirected,
}

impl LoginPhase {
    /// Phase after the visitor clicks the action, or `None` if the click
    /// should be ignored.
    pub fn submit(self) -> Option<Self> {
        match self {
            Self::AwaitingInput => Some(Self::Pending),
            Self::Pending | Self::Redirected => None,
        }
    }

    /// Phase after sign-in settles.
    pub fn complete(self, outcome: Result<(), SessionError>) -> Self {
        match (self, outcome) {
            (Self::Pending, Ok(())) => Self::Redirected,
            (Self::Pending, Err(_)) => Self::AwaitingInput,
            (phase, _) => phase,
        }
    }

    pub fn is_busy(self) -> bool {
        self == Self::Pending
    }
}

/// Form message shown after a failed sign-in.
pub fn sign_in_failed_message(err: SessionError) -> String {
    format!("Sign-in failed: {err}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::expect();
    let query = use_query_map();
    let phase = RwSignal::new(LoginPhase::default());
    let info = RwSignal::new(String::new());

    let on_login = move |_| {
        let Some(next) = phase.get_untracked().submit() else {
            return;
        };
        phase.set(next);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = session.sign_in().await;
            if let Err(e) = outcome {
                log::warn!("sign-in did not complete: {e}");
                info.set(sign_in_failed_message(e));
            }
            phase.update(|p| *p = p.complete(outcome));
        });
    };

    move || {
        if phase.get() == LoginPhase::Redirected {
            let origin = query.with_untracked(|q| Origin::from_query(q.get(FROM_PARAM).as_deref()));
            view! { <Redirect path=origin.href() options=replace_history()/> }.into_any()
        } else {
            view! {
                <div class="login-page">
                    <h2>"You must log in to view this page."</h2>
                    <button
                        class="login-button"
                        disabled=move || phase.get().is_busy()
                        on:click=on_login
                    >
                        "Log me in"
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}
