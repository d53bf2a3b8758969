//! Page shown only to signed-in visitors. Registered behind the route guard.

use leptos::prelude::*;

#[component]
pub fn ProtectedPage() -> impl IntoView {
    view! { <h3>"Protected"</h3> }
}
