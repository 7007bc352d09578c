use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::analysis::api;
use crate::system::session::{dispatch, try_dispatch, use_session, SessionEvent};

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let (session, set_session) = use_session();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                log::info!("selected file: {}", file.name());
                dispatch(set_session, SessionEvent::FileSelected(file));
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // The button is disabled while a request is outstanding; anything
        // that slips through is ignored by the machine as well.
        if session.with_untracked(|s| s.in_flight) {
            return;
        }

        dispatch(set_session, SessionEvent::UploadRequested);

        let snapshot = session.get_untracked();
        if !snapshot.in_flight {
            // Local validation failed; the message is already on screen.
            return;
        }
        let Some(file) = snapshot.selected_file else {
            return;
        };
        let authorization = snapshot.credentials.basic_header();

        spawn_local(async move {
            let outcome = api::analyze_file(&authorization, &file).await;
            try_dispatch(set_session, SessionEvent::UploadResolved(outcome));
        });
    };

    view! {
        <div class="analysis-container">
            <h2>"Sentiment Analysis"</h2>

            <form on:submit=on_submit>
                <input type="file" accept=".csv" on:change=handle_file_select />
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || session.with(|s| s.in_flight)
                >
                    {move || {
                        if session.with(|s| s.in_flight) { "Analyzing..." } else { "Analyze File" }
                    }}
                </button>
            </form>

            <Show when=move || session.with(|s| s.error.is_some())>
                <p class="error-message">
                    {move || session.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show when=move || session.with(|s| s.results.is_some())>
                <ResultsBlock />
            </Show>
        </div>
    }
}

/// Distribution counts plus the per-row detail table, in response order.
#[component]
fn ResultsBlock() -> impl IntoView {
    let (session, _) = use_session();

    let distribution = move || {
        session.with(|s| {
            s.results
                .as_ref()
                .map(|r| r.sentiment_distribution.clone().into_iter().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let details = move || {
        session.with(|s| {
            s.results
                .as_ref()
                .map(|r| r.detailed_results.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="results-block">
            <h3>"Results:"</h3>

            <div class="distribution">
                <h4>"Distribution:"</h4>
                {move || {
                    distribution()
                        .into_iter()
                        .map(|(sentiment, count)| {
                            view! { <div>{sentiment} ": " {count}</div> }
                        })
                        .collect_view()
                }}
            </div>

            <div class="details">
                <h4>"Details:"</h4>
                <table>
                    <thead>
                        <tr>
                            <th>"Text"</th>
                            <th>"Sentiment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            details()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.text}</td>
                                            <td>{row.sentiment}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
