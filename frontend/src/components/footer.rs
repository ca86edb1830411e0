//! Footer component

use leptos::*;

#[component]
pub fn Footer(
    #[prop(into)]
    app_name: String,
) -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer>
            <div>
                {format!("© {} {}. All rights reserved.", year, app_name)}
                " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
