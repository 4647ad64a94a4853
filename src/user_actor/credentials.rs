use std::convert::Infallible;
use chrono::{DateTime, Utc};
use crate::actor_framework::Entity;
use crate::domain::UserAuth;

#[derive(Debug, Clone)]
pub enum CredentialAction {
    /// Records a successful login.
    TouchLogin(DateTime<Utc>),
    /// Keeps the stored login email in step with a profile edit.
    ChangeEmail(String),
}

/// Credentials are always written with `put` under the owning user's id,
/// so they have no create params.
impl Entity for UserAuth {
    type Id = String;
    type CreateParams = Infallible;
    type Patch = ();
    type Action = CredentialAction;
    type ActionResult = ();

    const COLLECTION: &'static str = "userAuth";

    fn id(&self) -> &String { &self.user_id }

    fn from_create_params(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: CredentialAction) -> Result<(), String> {
        match action {
            CredentialAction::TouchLogin(at) => self.last_login = at,
            CredentialAction::ChangeEmail(email) => self.email = email,
        }
        Ok(())
    }
}
