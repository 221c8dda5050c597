//! In-memory user registry.
//!
//! Users are keyed by a random v4 UUID generated at creation. Nothing is
//! persisted; the registry lives as long as its owner.

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: HashMap<Uuid, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return it.
    ///
    /// The name must contain a non-whitespace character and the email an `@`.
    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidArgument("Name cannot be empty"));
        }
        if !email.contains('@') {
            return Err(RegistryError::InvalidArgument("Invalid email format"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        log::debug!("registered user {} ({})", user.id, user.name);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&User> {
        self.users.get(id)
    }

    /// Look up by the textual form of an id; malformed ids find nothing.
    pub fn find_by_id_str(&self, id: &str) -> Option<&User> {
        Uuid::parse_str(id).ok().and_then(|id| self.users.get(&id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find() {
        let mut registry = UserRegistry::new();
        let user = registry.create_user("Ada", "ada@example.com").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_by_id(&user.id), Some(&user));
        assert_eq!(registry.find_by_id_str(&user.id.to_string()), Some(&user));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = UserRegistry::new();
        assert_eq!(
            registry.create_user("", "a@b.c"),
            Err(RegistryError::InvalidArgument("Name cannot be empty"))
        );
        assert_eq!(
            registry.create_user("   \t", "a@b.c"),
            Err(RegistryError::InvalidArgument("Name cannot be empty"))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut registry = UserRegistry::new();
        let err = registry.create_user("Ada", "ada.example.com").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = UserRegistry::new();
        let a = registry.create_user("Ada", "ada@example.com").unwrap();
        let b = registry.create_user("Ada", "ada@example.com").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_id() {
        let registry = UserRegistry::new();
        assert_eq!(registry.find_by_id(&Uuid::new_v4()), None);
        assert_eq!(registry.find_by_id_str("not-a-uuid"), None);
    }
}
