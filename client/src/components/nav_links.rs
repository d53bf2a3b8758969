//! Static navigation links to the public and protected pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::AppRoute;

#[component]
pub fn NavLinks() -> impl IntoView {
    view! {
        <ul class="nav-links">
            <li>
                <A href=AppRoute::Public.path()>"Public Page"</A>
            </li>
            <li>
                <A href=AppRoute::Protected.path()>"Protected Page"</A>
            </li>
        </ul>
    }
}
