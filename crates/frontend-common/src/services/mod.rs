pub mod auth;
pub mod notes;

pub use auth::{AuthApiService, SessionError};
pub use notes::NotesService;
