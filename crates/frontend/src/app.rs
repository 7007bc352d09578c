use crate::analysis::page::AnalysisPage;
use crate::system::pages::login::LoginPage;
use crate::system::session::{provide_session, use_session};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One session state machine for the whole app, provided via context.
    provide_session();

    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.logged_in)
            fallback=|| view! { <LoginPage /> }
        >
            <AnalysisPage />
        </Show>
    }
}
