use crate::layout::Shell;
use crate::system::pages::{about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// A navigation entry shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ROUTES: [NavRoute; 3] = [
    NavRoute { name: "Home", path: "/" },
    NavRoute { name: "About", path: "/about" },
    NavRoute { name: "Contact", path: "/contact" },
];

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
