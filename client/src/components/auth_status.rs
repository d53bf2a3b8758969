//! Sign-in status shown above the navigation links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session flag reactively, so it flips the moment sign-in or
//! sign-out starts. The sign-out action is offered only while signed in.

#[cfg(test)]
#[path = "auth_status_test.rs"]
mod auth_status_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::AppRoute;
use crate::state::session::{Session, SessionState};

/// What the status control renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusView {
    Welcome,
    Anonymous,
}

impl StatusView {
    pub fn for_session(state: &SessionState) -> Self {
        if state.is_authenticated() { Self::Welcome } else { Self::Anonymous }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome!",
            Self::Anonymous => "You are not logged in.",
        }
    }

    pub fn offers_sign_out(self) -> bool {
        self == Self::Welcome
    }
}

#[component]
pub fn AuthStatus() -> impl IntoView {
    let session = Session::expect();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.sign_out().await {
                Ok(()) => navigate(AppRoute::Home.path(), NavigateOptions::default()),
                Err(e) => log::warn!("sign-out did not complete: {e}"),
            }
        });
    };

    let status = move || session.with(StatusView::for_session);

    view! {
        <p class="auth-status">
            {move || status().message()}
            <Show when=move || status().offers_sign_out()>
                " "
                <button class="auth-status__sign-out" on:click=on_sign_out.clone()>
                    "Sign out"
                </button>
            </Show>
        </p>
    }
}
