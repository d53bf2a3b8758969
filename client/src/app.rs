//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{auth_status::AuthStatus, nav_links::NavLinks};
use crate::pages::{home::HomePage, login::LoginPage, protected::ProtectedPage, public::PublicPage};
use crate::routing::AppRoute;
use crate::routing::guard::route_view;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, renders the status control and navigation
/// links, and registers the route table. Guards are attached by
/// [`route_view`] from each route's access policy.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Session::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <Router>
            <div class="app">
                <AuthStatus/>
                <NavLinks/>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment(AppRoute::Home.segment()) view=route_view(AppRoute::Home, HomePage)/>
                        <Route path=StaticSegment(AppRoute::Public.segment()) view=route_view(AppRoute::Public, PublicPage)/>
                        <Route path=StaticSegment(AppRoute::Login.segment()) view=route_view(AppRoute::Login, LoginPage)/>
                        <Route
                            path=StaticSegment(AppRoute::Protected.segment())
                            view=route_view(AppRoute::Protected, ProtectedPage)
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
