use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="About" />
            <CardAnimated style="max-width: 720px;">
                <p>
                    "A small blog. Posts are loaded from the blog API every time the home page opens."
                </p>
                <p>
                    "There are no accounts. Your browser keeps a short random visitor id in local storage and sends it along with each request."
                </p>
                <p>
                    "Visits from the same browser can be told apart without knowing who you are. Clearing site data removes the id."
                </p>
            </CardAnimated>
        </div>
    }
}
