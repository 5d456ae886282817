//! Users Page
//!
//! User list served through the query cache.

use leptos::prelude::*;

use crate::api;
use crate::config::{USERS_PAGE_LIMIT, USERS_STALE_TIME_MS};
use crate::query::{use_query, use_query_client};

const USERS_QUERY: &str = "users";

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = use_query_client();
    let users = use_query(USERS_QUERY, USERS_STALE_TIME_MS, || api::list_users(None));

    let refetch = move |_| {
        client.invalidate(USERS_QUERY);
        users.refetch();
    };

    view! {
        <div class="page-body">
            <h2>"Users (query cache)"</h2>
            <button on:click=refetch>"Refetch"</button>
            <Suspense fallback=|| view! { <p>"Loading…"</p> }>
                {move || Suspend::new(async move {
                    match users.await {
                        Ok(list) => view! {
                            <ul>
                                {list
                                    .into_iter()
                                    .take(USERS_PAGE_LIMIT)
                                    .map(|u| view! { <li>{u.name} " " <small class="muted">{u.email}</small></li> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any(),
                        Err(e) => {
                            log::warn!("users page: {}", e);
                            view! { <p class="error">"Error"</p> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}
