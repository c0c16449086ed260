//! Notes API service

use crate::auth::token_store::{LocalTokenStore, TokenStore};
use crate::client::{attach_session, create_authenticated_client};
use notes_http::client::{AuthenticatedNotesClient, ClientError, PublicNotesClient};
use notes_http::types::{CreateNoteRequest, Note};

#[derive(Clone)]
pub struct NotesService<S = LocalTokenStore> {
    store: S,
    client: Option<PublicNotesClient>,
}

impl NotesService {
    pub const fn new() -> Self {
        Self {
            store: LocalTokenStore,
            client: None,
        }
    }
}

impl Default for NotesService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenStore> NotesService<S> {
    pub const fn with_client(store: S, client: PublicNotesClient) -> Self {
        Self {
            store,
            client: Some(client),
        }
    }

    /// Client for this call, carrying the access token stored right now
    fn client(&self) -> Result<AuthenticatedNotesClient, ClientError> {
        let session = match &self.client {
            Some(client) => attach_session(client, &self.store),
            None => create_authenticated_client(&self.store)?,
        };
        session.ok_or_else(|| ClientError::Configuration("Not authenticated".into()))
    }

    /// List all notes
    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        self.client()?.list_notes().await
    }

    /// Create a note
    pub async fn create(&self, title: String, content: String) -> Result<Note, ClientError> {
        self.client()?
            .create_note(CreateNoteRequest { title, content })
            .await
    }

    /// Delete a note
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client()?.delete_note(id).await
    }
}
