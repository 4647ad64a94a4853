use chrono::Utc;
use tracing::{debug, instrument};
use crate::domain::{User, UserAuth, UserCreate, UserPatch};
use crate::user_actor::{CredentialAction, UserError};
use crate::actor_framework::ResourceClient;

/// Client for the `users` and `userAuth` collections.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    credentials: ResourceClient<UserAuth>,
}

impl_client_methods!(UserClient, User, UserError, user);

impl UserClient {
    pub fn new(inner: ResourceClient<User>, credentials: ResourceClient<UserAuth>) -> Self {
        Self { inner, credentials }
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        Ok(self.inner.create(user).await?)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn put_user(&self, user: User) -> Result<(), UserError> {
        debug!("Sending request");
        Ok(self.inner.put(user).await?)
    }

    /// Emails compare case-insensitively.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let email = email.trim().to_lowercase();
        let found = self
            .inner
            .query(move |user: &User| user.email.to_lowercase() == email)
            .await?;
        Ok(found.into_iter().next())
    }

    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self, auth), fields(user_id = %auth.user_id))]
    pub async fn put_credentials(&self, auth: UserAuth) -> Result<(), UserError> {
        debug!("Sending request");
        Ok(self.credentials.put(auth).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_credentials(&self, user_id: String) -> Result<Option<UserAuth>, UserError> {
        debug!("Sending request");
        Ok(self.credentials.get(user_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn touch_login(&self, user_id: String) -> Result<(), UserError> {
        debug!("Sending request");
        Ok(self.credentials.perform_action(user_id, CredentialAction::TouchLogin(Utc::now())).await?)
    }

    #[instrument(skip(self))]
    pub async fn change_login_email(&self, user_id: String, email: String) -> Result<(), UserError> {
        debug!("Sending request");
        Ok(self.credentials.perform_action(user_id, CredentialAction::ChangeEmail(email)).await?)
    }
}
