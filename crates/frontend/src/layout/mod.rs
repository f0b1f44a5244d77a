pub mod center;
pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page shell shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |        Header (title + navigation)        |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="app-main">
                <center::Center>
                    {children()}
                </center::Center>
            </div>

            <footer::Footer />
        </div>
    }
}
