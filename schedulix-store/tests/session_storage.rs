use std::path::PathBuf;

use schedulix_core::models::{Identity, Tenant};
use schedulix_store::{
    storage, FileStore, MemoryStore, SessionStore, TENANT_KEY, TOKEN_KEY, USER_KEY,
};
use uuid::Uuid;

/// Test factory functions
fn identity() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: "kim@clinic.test".to_string(),
        first_name: "Kim".to_string(),
        last_name: "Soto".to_string(),
        roles: vec!["Accountant".to_string()],
        tenant: Some(Tenant {
            id: Uuid::new_v4(),
            name: "Sunrise Clinic".to_string(),
            slug: "sunrise".to_string(),
        }),
    }
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("schedulix-store-test-{}", Uuid::new_v4()))
}

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::new();

    assert!(store.get(TOKEN_KEY).unwrap().is_none());
    store.set(TOKEN_KEY, "tok").unwrap();
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
    store.remove(TOKEN_KEY).unwrap();
    assert!(store.get(TOKEN_KEY).unwrap().is_none());

    // Removing an absent key is fine.
    store.remove("missing").unwrap();
}

#[test]
fn file_store_survives_a_fresh_handle() {
    let dir = scratch_dir();
    let user = identity();

    {
        let store = FileStore::new(&dir).unwrap();
        storage::save_session(&store, "tok-123", &user).unwrap();
    }

    // Act: a brand-new handle over the same directory (process restart)
    let store = FileStore::new(&dir).unwrap();
    let session = storage::load_session(&store).unwrap().unwrap();

    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user, Some(user.clone()));
    assert_eq!(session.tenant, user.tenant);

    storage::clear_session(&store).unwrap();
    assert!(storage::load_session(&store).unwrap().is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn file_store_removing_absent_keys_is_not_an_error() {
    let dir = scratch_dir();
    let store = FileStore::new(&dir).unwrap();

    store.remove(TOKEN_KEY).unwrap();
    assert!(store.get(USER_KEY).unwrap().is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn a_token_alone_is_still_a_session() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok-partial").unwrap();

    let session = storage::load_session(&store).unwrap().unwrap();
    assert_eq!(session.token, "tok-partial");
    assert!(session.user.is_none());
    assert!(session.tenant.is_none());
}

#[test]
fn identity_and_tenant_without_a_token_are_not_a_session() {
    let store = MemoryStore::new();
    store
        .set(USER_KEY, &serde_json::to_string(&identity()).unwrap())
        .unwrap();
    store.set(TENANT_KEY, "{}").unwrap();

    assert!(storage::load_session(&store).unwrap().is_none());
}

#[test]
fn clear_session_removes_every_key_regardless_of_contents() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok").unwrap();
    store.set(USER_KEY, "not even json").unwrap();
    store.set(TENANT_KEY, "also junk").unwrap();

    storage::clear_session(&store).unwrap();

    assert!(store.get(TOKEN_KEY).unwrap().is_none());
    assert!(store.get(USER_KEY).unwrap().is_none());
    assert!(store.get(TENANT_KEY).unwrap().is_none());
}
