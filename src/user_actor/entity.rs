use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = "users";

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Names, email and role
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if params.email.trim().is_empty() {
            return Err("email is required".to_string());
        }
        Ok(Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            role: params.role,
        })
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `first_name`, `last_name`: display name
    /// - `email`: login email; uniqueness is checked by the caller
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(email) = &patch.email {
            if email.trim().is_empty() {
                return Err("email is required".to_string());
            }
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
