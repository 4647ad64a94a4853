use std::fmt::Display;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient user-facing message, shown once and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Pending notices for one session. Every notice is also logged.
#[derive(Debug, Default)]
pub struct Notices {
    pending: Vec<Notice>,
}

impl Notices {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    /// Records a failure: the user sees `message`, the log also gets `cause`.
    pub fn error(&mut self, message: impl Into<String>, cause: &dyn Display) {
        let message = message.into();
        error!(error = %cause, "{message}");
        self.pending.push(Notice { level: NoticeLevel::Error, message });
    }

    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        info!(?level, "{message}");
        self.pending.push(Notice { level, message });
    }
}
