use crate::domain::a001_blog_post::ui::list::BlogPostList;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use thaw::*;

/// Landing page: the list of blog posts.
#[component]
pub fn HomePage() -> impl IntoView {
    let reload = RwSignal::new(0u32);

    view! {
        <div class="page">
            <PageHeader title="Latest posts" subtitle="Notes, write-ups and announcements">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| reload.update(|n| *n += 1)
                >
                    "Refresh"
                </Button>
            </PageHeader>
            <BlogPostList reload=reload />
        </div>
    }
}
