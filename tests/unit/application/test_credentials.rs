use kavya_client::application::credentials::{
    EnvToken, FileTokenStore, MemoryTokenStore, StaticToken, TokenProvider,
};
use kavya_client::error::AppError;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn temp_token_path(name: &str) -> PathBuf {
    env::temp_dir()
        .join(format!("kavya-client-tests-{}", std::process::id()))
        .join(name)
        .join("token")
}

#[test]
fn test_static_token() {
    assert_eq!(StaticToken::new("abc").token(), Some("abc".to_string()));
    assert_eq!(StaticToken::none().token(), None);
    assert_eq!(StaticToken::default().token(), None);
}

#[test]
fn test_env_token_is_read_on_every_call() {
    let provider = EnvToken::new("KAVYA_TEST_TOKEN_PROVIDER");
    unsafe {
        env::remove_var("KAVYA_TEST_TOKEN_PROVIDER");
        assert_eq!(provider.token(), None);

        env::set_var("KAVYA_TEST_TOKEN_PROVIDER", "first");
        assert_eq!(provider.token(), Some("first".to_string()));

        env::set_var("KAVYA_TEST_TOKEN_PROVIDER", "second");
        assert_eq!(provider.token(), Some("second".to_string()));

        env::set_var("KAVYA_TEST_TOKEN_PROVIDER", "");
        assert_eq!(provider.token(), None);
        env::remove_var("KAVYA_TEST_TOKEN_PROVIDER");
    }
}

#[test]
fn test_memory_store_shared_between_holders() {
    let store = Arc::new(MemoryTokenStore::new());
    let provider: Arc<dyn TokenProvider> = store.clone();
    assert_eq!(provider.token(), None);

    store.set("logged-in");
    assert_eq!(provider.token(), Some("logged-in".to_string()));

    store.clear();
    assert_eq!(provider.token(), None);
}

#[test]
fn test_file_store_round_trip() {
    let store = FileTokenStore::new(temp_token_path("round_trip"));
    store.clear().unwrap();
    assert_eq!(store.token(), None);

    store.store("persisted-token").unwrap();
    assert_eq!(store.token(), Some("persisted-token".to_string()));

    let other = FileTokenStore::new(store.path());
    assert_eq!(other.token(), Some("persisted-token".to_string()));

    store.clear().unwrap();
    assert_eq!(other.token(), None);
    store.clear().unwrap();
}

#[test]
fn test_file_store_ignores_blank_file() {
    let path = temp_token_path("blank");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "\n  \n").unwrap();

    let store = FileTokenStore::new(&path);
    assert_eq!(store.token(), None);
    store.clear().unwrap();
}

#[test]
fn test_file_store_rejects_blank_token() {
    let store = FileTokenStore::new(temp_token_path("reject"));
    match store.store("  ") {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("blank")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_in_memory_tokens_are_kept_exactly() {
    assert_eq!(
        StaticToken::new(" padded ").token(),
        Some(" padded ".to_string())
    );
    assert_eq!(StaticToken::new(" \t ").token(), None);

    let store = MemoryTokenStore::new();
    store.set("tok\u{a0}en ");
    assert_eq!(store.token(), Some("tok\u{a0}en ".to_string()));
    store.set(" \n");
    assert_eq!(store.token(), None);
}

#[test]
fn test_file_store_trims_line_endings() {
    let path = temp_token_path("trimmed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "written-by-editor\r\n").unwrap();

    let store = FileTokenStore::new(&path);
    assert_eq!(store.token(), Some("written-by-editor".to_string()));

    store.store("  spaced-token \n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "spaced-token");
    store.clear().unwrap();
}
