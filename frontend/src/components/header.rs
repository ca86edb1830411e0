//! Header component

use leptos::*;

#[component]
pub fn Header(
    /// Text of the page heading.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-inner">
                <span class="logo-dot"></span>
                <h1 class="header-title">{title}</h1>
                <span class="header-spacer"></span>
            </div>
        </header>
    }
}
