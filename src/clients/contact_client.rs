use tracing::{debug, instrument};
use crate::domain::{ContactCreate, ContactMessage, MessageStatus};
use crate::contact_actor::{ContactAction, ContactError};
use crate::actor_framework::ResourceClient;

/// Client for the `contactMessages` collection.
#[derive(Clone)]
pub struct ContactClient {
    inner: ResourceClient<ContactMessage>,
}

impl_basic_client!(ContactClient, ContactMessage, ContactError, message);

fn newest_first(mut messages: Vec<ContactMessage>) -> Vec<ContactMessage> {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    messages
}

impl ContactClient {
    #[instrument(skip(self, message), fields(email = %message.email))]
    pub async fn submit(&self, message: ContactCreate) -> Result<String, ContactError> {
        debug!("Sending request");
        Ok(self.inner.create(message).await?)
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn put_message(&self, message: ContactMessage) -> Result<(), ContactError> {
        debug!("Sending request");
        Ok(self.inner.put(message).await?)
    }

    #[instrument(skip(self))]
    pub async fn all_messages(&self) -> Result<Vec<ContactMessage>, ContactError> {
        debug!("Sending request");
        Ok(newest_first(self.inner.list().await?))
    }

    #[instrument(skip(self))]
    pub async fn messages_with_status(&self, status: MessageStatus) -> Result<Vec<ContactMessage>, ContactError> {
        debug!("Sending request");
        let messages = self.inner.query(move |message: &ContactMessage| message.status == status).await?;
        Ok(newest_first(messages))
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: String, status: MessageStatus) -> Result<MessageStatus, ContactError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, ContactAction::SetStatus(status)).await?)
    }
}
