//! Page anyone can open.

use leptos::prelude::*;

#[component]
pub fn PublicPage() -> impl IntoView {
    view! { <h3>"Public"</h3> }
}
