use leptos::prelude::*;

/// Page title with an optional lead line and a slot for page actions.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            {children.map(|actions| view! {
                <div class="page-header__actions">{actions()}</div>
            })}
        </header>
    }
}
