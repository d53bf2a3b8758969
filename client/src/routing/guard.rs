//! Route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes render their view only while the session passes the
//! route's predicate. Otherwise the visitor is redirected to the fallback
//! route with the current location attached, so login can send them back.
//!
//! The check runs on every match of the route, never once at startup, since
//! the session can change between visits.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::origin::{Origin, RedirectIntent};
use super::{Access, AppRoute, Predicate};
use crate::state::session::{Session, SessionState};

/// Outcome of checking a route's access policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(RedirectIntent),
}

/// Decide whether a visitor at `origin` may see a route with `access`.
pub fn decide(access: Access, session: &SessionState, origin: Origin) -> GuardDecision {
    match access {
        Access::Open => GuardDecision::Render,
        Access::Guarded { predicate, fallback } if !predicate(session) => {
            GuardDecision::Redirect(RedirectIntent::new(fallback, origin))
        }
        Access::Guarded { .. } => GuardDecision::Render,
    }
}

/// Route view for `route`, guarded according to its [`Access`] policy.
pub fn route_view<F, V>(route: AppRoute, view: F) -> impl Fn() -> AnyView + Clone + Send + 'static
where
    F: Fn() -> V + Clone + Send + 'static,
    V: IntoView + 'static,
{
    let guarded = match route.access() {
        Access::Open => None,
        Access::Guarded { predicate, fallback } => Some(guard(view.clone(), predicate, fallback)),
    };
    move || match &guarded {
        Some(render) => render(),
        None => view().into_any(),
    }
}

/// Wrap `view` so it only renders while `predicate` holds for the session.
pub fn guard<F, V>(view: F, predicate: Predicate, fallback: AppRoute) -> impl Fn() -> AnyView + Clone + Send + 'static
where
    F: Fn() -> V + Clone + Send + 'static,
    V: IntoView + 'static,
{
    move || guarded_view(&view, predicate, fallback)
}

fn guarded_view<F, V>(view: &F, predicate: Predicate, fallback: AppRoute) -> AnyView
where
    F: Fn() -> V,
    V: IntoView + 'static,
{
    let session = Session::expect();
    let location = use_location();
    let origin = Origin::new(location.pathname.get_untracked(), location.search.get_untracked())
        .with_hash(location.hash.get_untracked());

    match decide(Access::Guarded { predicate, fallback }, &session.snapshot(), origin) {
        GuardDecision::Render => view().into_any(),
        GuardDecision::Redirect(intent) => {
            log::debug!("guard redirect: {} -> {}", intent.origin.href(), intent.target.path());
            view! { <Redirect path=intent.href() options=replace_history()/> }.into_any()
        }
    }
}

/// Navigation options that replace the current history entry.
pub(crate) fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
