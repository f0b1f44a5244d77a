use crate::routes::routes::NAV_ROUTES;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ROUTES.into_iter().map(|route| {
                    view! {
                        <li>
                            <A href=route.path>{route.name}</A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
