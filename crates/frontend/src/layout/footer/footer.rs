use crate::system::visitor::context::use_visitor;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let visitor = use_visitor();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{format!("© {}", year)}</span>
            <span class=move || visitor.css_class()>
                {move || visitor.label()}
            </span>
        </footer>
    }
}
