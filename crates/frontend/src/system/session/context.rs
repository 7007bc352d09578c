use leptos::prelude::*;

use super::model::{SessionEvent, SessionModel};

/// The machine as instantiated by the app: files are real browser handles.
pub type Session = SessionModel<web_sys::File>;

/// `web_sys::File` is not `Send`, so the session lives in local-storage
/// signals.
pub type SessionRead = ReadSignal<Session, LocalStorage>;
pub type SessionWrite = WriteSignal<Session, LocalStorage>;

/// Provide the session state machine to the component tree.
pub fn provide_session() {
    let (session, set_session) = signal_local(Session::default());
    provide_context(session);
    provide_context(set_session);
}

/// Hook to access the session state.
pub fn use_session() -> (SessionRead, SessionWrite) {
    let session =
        use_context::<SessionRead>().expect("session context not found in component tree");
    let set_session =
        use_context::<SessionWrite>().expect("session context not found in component tree");

    (session, set_session)
}

/// Advance the session snapshot by one event.
pub fn dispatch(set_session: SessionWrite, event: SessionEvent<web_sys::File>) {
    set_session.update(|model| *model = std::mem::take(model).apply(event));
}

/// Like [`dispatch`], but tolerates a disposed owner. Used for network
/// responses that may land after the view was torn down.
pub fn try_dispatch(set_session: SessionWrite, event: SessionEvent<web_sys::File>) {
    _ = set_session.try_update(|model| *model = std::mem::take(model).apply(event));
}
