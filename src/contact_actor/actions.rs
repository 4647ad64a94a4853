use crate::domain::MessageStatus;

#[derive(Debug, Clone)]
pub enum ContactAction {
    /// Returns the previous status.
    SetStatus(MessageStatus),
}
