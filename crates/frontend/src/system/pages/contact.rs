use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::site_config;
use crate::system::visitor::context::use_visitor;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let visitor = use_visitor();
    let endpoint = site_config().api.blogs_url();

    view! {
        <div class="page">
            <PageHeader title="Contact" />
            <CardAnimated style="max-width: 720px;">
                <p>"Reporting a problem with the site? Please include the details below."</p>
                <dl class="contact-details">
                    <dt>"Visitor id"</dt>
                    <dd>
                        {move || visitor
                            .visitor_id
                            .get()
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "unavailable".to_string())}
                    </dd>
                    <dt>"Blog API"</dt>
                    <dd><code>{endpoint}</code></dd>
                </dl>
            </CardAnimated>
        </div>
    }
}
