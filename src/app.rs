//! Playground App
//!
//! Providers, navigation bar and client-side routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::context::ThemeProvider;
use crate::pages::{PlaygroundPage, SignupPage, UsersPage};
use crate::query::QueryClient;
use crate::store::AppState;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <A href="/" exact=true>"Playground"</A>
            <A href="/users">"Users (query cache)"</A>
            <A href="/form">"Form (validator)"</A>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(QueryClient::new());

    view! {
        <ThemeProvider>
            <Router>
                <NavBar />
                <Routes fallback=|| view! { <p class="page-body">"Page not found."</p> }>
                    <Route path=path!("/") view=PlaygroundPage />
                    <Route path=path!("/users") view=UsersPage />
                    <Route path=path!("/form") view=SignupPage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
