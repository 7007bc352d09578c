use leptos::prelude::*;

use crate::system::session::{dispatch, use_session, SessionEvent};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let (session, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Local gate only: non-empty fields. The credentials are verified by
        // nothing until the first upload replays them to the service.
        dispatch(
            set_session,
            SessionEvent::LoginSubmitted {
                username: username.get_untracked(),
                password: password.get_untracked(),
            },
        );
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            id="username"
                            placeholder="Username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Login"
                    </button>
                </form>

                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="error-message">
                        {move || session.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </div>
        </div>
    }
}
