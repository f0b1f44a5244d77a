//! Thaw `Card` that fades in when mounted.
//!
//! Lists pass an increasing `delay_ms` so cards appear one after another:
//! ```text
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Upper bound for stagger delays, so long lists do not keep animating.
pub const MAX_DELAY_MS: u32 = 640;

/// Delay for the `index`-th card in a list, `step_ms` apart and capped.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
        .min(MAX_DELAY_MS)
}

#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
