//! Small convenience constructors for common types.

use crate::{Message, Role};

pub fn system_message(content: impl Into<String>) -> Message {
    Message::new(Role::System, content)
}

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

#[cfg(test)]
mod tests {
    use crate::Role;

    use super::{system_message, user_message};

    #[test]
    fn message_helpers_apply_expected_roles() {
        assert_eq!(user_message("hello").role, Role::User);
        assert_eq!(system_message("be brief").role, Role::System);
        assert!(user_message("hello").tool_calls.is_empty());
    }
}
