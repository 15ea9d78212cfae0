use crate::model::UserRecord;

pub mod add;
pub mod check;
pub mod edit;
pub mod list;
pub mod password;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records added, removed or edited by the command.
    pub affected_users: Vec<UserRecord>,
    pub listed_users: Vec<UserRecord>,
    pub password: Option<String>,
    /// Set by targeted commands (`remove`, `edit`) when no record matched.
    pub not_found: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<UserRecord>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_listed_users(mut self, users: Vec<UserRecord>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(password);
        self
    }

    /// Mark the result as a miss and say which id was looked up.
    pub fn user_not_found(mut self, user_id: &str) -> Self {
        self.not_found = true;
        self.add_message(CmdMessage::warning(format!("User {} not found.", user_id)));
        self
    }

    /// True when a targeted command matched nothing.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}
