//! Registry tests - user creation and lookup by generated id

use tenpin::registry::{RegistryError, UserRegistry};

#[test]
fn users_are_found_by_generated_id() {
    let mut registry = UserRegistry::new();
    let ada = registry.create_user("Ada", "ada@example.com").unwrap();
    let bob = registry.create_user("Bob", "bob@example.com").unwrap();

    assert_eq!(
        registry.find_by_id(&ada.id).map(|u| u.name.as_str()),
        Some("Ada")
    );
    assert_eq!(
        registry.find_by_id(&bob.id).map(|u| u.email.as_str()),
        Some("bob@example.com")
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn invalid_arguments_register_nothing() {
    let mut registry = UserRegistry::new();
    assert!(matches!(
        registry.create_user(" ", "x@y"),
        Err(RegistryError::InvalidArgument(_))
    ));
    assert!(matches!(
        registry.create_user("Ada", ""),
        Err(RegistryError::InvalidArgument(_))
    ));
    assert!(registry.is_empty());
}
