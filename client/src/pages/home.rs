//! Landing page at `/`. Sign-out and direct logins end up here.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <p class="home-hint">"Pick a page above."</p> }
}
