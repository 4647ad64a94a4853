use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{ContactCreate, ContactMessage, MessageStatus};
use super::actions::ContactAction;

impl Entity for ContactMessage {
    type Id = String;
    type CreateParams = ContactCreate;
    type Patch = ();
    type Action = ContactAction;
    type ActionResult = MessageStatus;

    const COLLECTION: &'static str = "contactMessages";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: ContactCreate) -> Result<Self, String> {
        let missing: Vec<&str> = [
            ("name", &params.name),
            ("email", &params.email),
            ("message", &params.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(missing.join(", "));
        }

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            feedback_type: params.feedback_type,
            message: params.message,
            status: MessageStatus::New,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: ContactAction) -> Result<MessageStatus, String> {
        match action {
            ContactAction::SetStatus(status) => Ok(std::mem::replace(&mut self.status, status)),
        }
    }
}
