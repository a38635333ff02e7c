use storage::repository::{KvStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("progress").await.unwrap(), None);

    repo.set("progress", r#"{"totalFactsViewed":1}"#)
        .await
        .unwrap();
    assert_eq!(
        repo.get("progress").await.unwrap(),
        Some(r#"{"totalFactsViewed":1}"#.to_string())
    );

    repo.set("progress", r#"{"totalFactsViewed":2}"#)
        .await
        .unwrap();
    assert_eq!(
        repo.get("progress").await.unwrap(),
        Some(r#"{"totalFactsViewed":2}"#.to_string())
    );
}

#[tokio::test]
async fn sqlite_delete_clears_the_record() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_delete?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set("progress", "{}").await.unwrap();
    repo.delete("progress").await.unwrap();
    assert_eq!(repo.get("progress").await.unwrap(), None);

    // Deleting again is a no-op, not an error.
    repo.delete("progress").await.unwrap();
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn storage_bundle_exposes_the_kv_port() {
    let storage = Storage::sqlite("sqlite:file:memdb_bundle?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set("k", "v").await.unwrap();
    assert_eq!(storage.kv.get("k").await.unwrap(), Some("v".to_string()));
}
