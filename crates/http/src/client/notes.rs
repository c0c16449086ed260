//! Notes collection endpoints

use super::{error::ClientError, typed::AuthenticatedNotesClient};
use crate::types::{CreateNoteRequest, Note};
use reqwest::Method;

/// Notes endpoints, all requiring authentication
impl AuthenticatedNotesClient {
    /// List the current user's notes
    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let request = self.request(Method::GET, "/api/notes/");
        self.execute(request).await
    }

    /// Create a note
    pub async fn create_note(&self, req: CreateNoteRequest) -> Result<Note, ClientError> {
        let request = self.request(Method::POST, "/api/notes/").json(&req);
        self.execute(request).await
    }

    /// Delete a note by id
    pub async fn delete_note(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/notes/delete/{id}/"));
        self.send(request).await.map(|_| ())
    }
}
