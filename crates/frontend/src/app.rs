use crate::routes::routes::AppRoutes;
use crate::system::visitor::context::provide_visitor_context;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolve (or create) the visitor id once and share it with the tree.
    provide_visitor_context();

    view! {
        <AppRoutes />
    }
}
