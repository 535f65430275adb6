use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"Smart"<span class="app-title-accent">"Circuit"</span></h1>
            <nav class="header-nav">
                <a href="/" class="nav-link">"Editor"</a>
                <a href="/settings" class="nav-link">"Settings"</a>
            </nav>
        </header>
    }
}
