use super::*;

#[tokio::test]
async fn set_get_round_trip() {
    let store = MemoryKeyStore::new();
    store
        .set("alice", OPENAI_KEY_NAME, Secret::new("sk-test"))
        .await;
    let secret = store.get("alice", OPENAI_KEY_NAME).await.unwrap();
    assert_eq!(secret.expose(), "sk-test");
}

#[tokio::test]
async fn set_is_an_upsert() {
    let store = MemoryKeyStore::new();
    store.set("alice", OPENAI_KEY_NAME, Secret::new("old")).await;
    store.set("alice", OPENAI_KEY_NAME, Secret::new("new")).await;
    let secret = store.get("alice", OPENAI_KEY_NAME).await.unwrap();
    assert_eq!(secret.expose(), "new");
}

#[tokio::test]
async fn keys_are_scoped_per_user() {
    let store = MemoryKeyStore::new();
    store.set("alice", OPENAI_KEY_NAME, Secret::new("a")).await;
    assert!(store.has_key("alice", OPENAI_KEY_NAME).await);
    assert!(!store.has_key("bob", OPENAI_KEY_NAME).await);
}

#[tokio::test]
async fn missing_key_is_an_error_on_get_and_false_on_has_key() {
    let store = MemoryKeyStore::new();
    assert!(matches!(
        store.get("alice", OPENAI_KEY_NAME).await,
        Err(SecretsError::Missing { .. })
    ));
    assert!(!store.has_key("alice", OPENAI_KEY_NAME).await);
}

#[tokio::test]
async fn delete_removes_the_key_and_tolerates_absence() {
    let store = MemoryKeyStore::new();
    store.set("alice", OPENAI_KEY_NAME, Secret::new("a")).await;
    store.delete("alice", OPENAI_KEY_NAME).await;
    assert!(!store.has_key("alice", OPENAI_KEY_NAME).await);
    store.delete("alice", OPENAI_KEY_NAME).await;
}

#[test]
fn secret_debug_output_is_redacted() {
    let secret = Secret::new("sk-very-private");
    assert_eq!(format!("{secret:?}"), "Secret(***)");
}
