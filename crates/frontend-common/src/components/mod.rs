mod credentials_form;
mod note_card;
mod spinner;

pub use credentials_form::{CredentialsForm, FormMethod};
pub use note_card::{NoteCard, format_created_at};
pub use spinner::LoadingSpinner as Spinner;
