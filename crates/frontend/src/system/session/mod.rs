mod context;
mod model;

pub use context::{
    dispatch, provide_session, try_dispatch, use_session, Session, SessionRead, SessionWrite,
};
pub use model::{SessionEvent, SessionModel, UploadOutcome, ERR_UPLOAD_FAILED};
