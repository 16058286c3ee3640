//! Session slice

use serde::{Deserialize, Serialize};

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub age: Option<u32>,
}

impl User {
    pub fn new(username: impl Into<String>, age: Option<u32>) -> Self {
        Self {
            username: username.into(),
            age,
        }
    }

    /// Ten-year age bracket label, e.g. `30-39`
    pub fn age_group(&self) -> Option<String> {
        self.age.map(|age| {
            let low = age / 10 * 10;
            format!("{}-{}", low, low + 9)
        })
    }
}

/// Who is signed in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        tracing::info!(username = %user.username, "Signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }
}
