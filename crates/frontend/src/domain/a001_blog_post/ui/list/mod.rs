use crate::domain::a001_blog_post::api::fetch_blogs;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::date_utils::format_date;
use crate::system::visitor::context::use_visitor;
use contracts::domain::a001_blog_post::BlogPost;
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use thaw::*;

const EXCERPT_CHARS: usize = 280;

#[derive(Clone, Debug, PartialEq)]
enum FeedState {
    Loading,
    Loaded(Vec<BlogPost>),
    Failed(String),
}

impl From<Result<Vec<BlogPost>, ApiError>> for FeedState {
    fn from(result: Result<Vec<BlogPost>, ApiError>) -> Self {
        match result {
            Ok(posts) => FeedState::Loaded(posts),
            Err(e) if e.is_remote() => {
                FeedState::Failed(format!("The blog service did not answer ({}).", e))
            }
            Err(e) => FeedState::Failed(format!("Could not load posts: {}", e)),
        }
    }
}

/// Card-ready view of a post.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogPostRow {
    pub title: String,
    pub meta: Option<String>,
    pub excerpt: Option<String>,
}

impl From<&BlogPost> for BlogPostRow {
    fn from(post: &BlogPost) -> Self {
        let meta: Vec<String> = [
            post.author().map(str::to_string),
            post.published_on().map(format_date),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: post.title().unwrap_or("Untitled").to_string(),
            meta: (!meta.is_empty()).then(|| meta.join(" · ")),
            excerpt: post.excerpt(EXCERPT_CHARS),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BlogPostList(
    /// Bumped to fetch the feed again
    reload: RwSignal<u32>,
) -> impl IntoView {
    let state = RwSignal::new(FeedState::Loading);
    let visitor = use_visitor();

    // Загружаем записи при монтировании и при каждом обновлении
    Effect::new(move |_| {
        reload.track();
        state.set(FeedState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_blogs().await;
            visitor.refresh();
            state.set(result.into());
        });
    });

    view! {
        <div class="blog-list">
            {move || match state.get() {
                FeedState::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                        <Spinner />
                        <span>"Loading posts..."</span>
                    </Flex>
                }.into_any(),
                FeedState::Failed(message) => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div style="display: flex; align-items: center; gap: var(--spacing-sm); flex-wrap: wrap;">
                            <span>{message}</span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                on_click=move |_| reload.update(|n| *n += 1)
                            >
                                "Retry"
                            </Button>
                        </div>
                    </MessageBar>
                }.into_any(),
                FeedState::Loaded(posts) if posts.is_empty() => view! {
                    <p class="blog-list__empty">"No posts yet."</p>
                }.into_any(),
                FeedState::Loaded(posts) => posts
                    .iter()
                    .enumerate()
                    .map(|(i, post)| {
                        let row = BlogPostRow::from(post);
                        view! { <BlogPostCard row=row delay_ms={stagger_delay(i, 80)} /> }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn BlogPostCard(row: BlogPostRow, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms style="margin-bottom: var(--spacing-md);">
            <article class="blog-post">
                <h2 class="blog-post__title">{row.title}</h2>
                {row.meta.map(|meta| view! { <div class="blog-post__meta">{meta}</div> })}
                {row.excerpt.map(|text| view! { <p class="blog-post__excerpt">{text}</p> })}
            </article>
        </CardAnimated>
    }
}
