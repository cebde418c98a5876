//! Domain entities.

/// Member every new room starts with
pub const DEFAULT_ROOM_MEMBER: &str = "holden";

/// Chat room entity
///
/// Messages and users only ever grow by append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub messages: Vec<String>,
    pub users: Vec<String>,
}

impl Room {
    /// Create a room seeded with a welcome message and the default member
    pub fn new(name: String) -> Self {
        let welcome = format!("Welcome to {}", name);
        Self {
            name,
            messages: vec![welcome],
            users: vec![DEFAULT_ROOM_MEMBER.to_string()],
        }
    }

    pub fn add_user(&mut self, user: String) {
        self.users.push(user);
    }

    pub fn add_message(&mut self, body: String) {
        self.messages.push(body);
    }
}
