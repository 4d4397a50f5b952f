use lorecast::application::ports::ResultCache;
use lorecast::domain::{ContentRequest, JobRecord, RequestFingerprint};
use lorecast::infrastructure::persistence::JsonFileCache;

fn fingerprint() -> RequestFingerprint {
    let request: ContentRequest =
        serde_json::from_str(r#"{"text": "hello", "outputType": "audio"}"#).unwrap();
    RequestFingerprint::compute(&request).unwrap()
}

fn success_record() -> JobRecord {
    JobRecord {
        request_id: "req-123".to_string(),
        status: 100,
        audio_url: Some("http://cdn/ep.wav".to_string()),
        audio_title: Some("Episode One".to_string()),
        file_path: None,
        error_message: None,
    }
}

#[tokio::test]
async fn given_stored_record_when_looking_up_then_returns_it() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = JsonFileCache::load(dir.path().join("audio_cache.json"))
        .await
        .unwrap();

    cache.store(&fingerprint(), &success_record()).await.unwrap();

    let hit = cache.lookup(&fingerprint()).await.unwrap();
    assert_eq!(hit, Some(success_record()));
}

#[tokio::test]
async fn given_stored_record_when_reloading_from_disk_then_entry_survives() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("audio_cache.json");

    let cache = JsonFileCache::load(path.clone()).await.unwrap();
    cache.store(&fingerprint(), &success_record()).await.unwrap();
    drop(cache);

    let reloaded = JsonFileCache::load(path).await.unwrap();
    let hit = reloaded.lookup(&fingerprint()).await.unwrap();
    assert_eq!(hit, Some(success_record()));
}

#[tokio::test]
async fn given_unknown_fingerprint_when_looking_up_then_returns_none() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = JsonFileCache::load(dir.path().join("audio_cache.json"))
        .await
        .unwrap();

    assert_eq!(cache.lookup(&fingerprint()).await.unwrap(), None);
}

#[tokio::test]
async fn given_corrupt_cache_file_when_loading_then_starts_empty_and_preserves_original() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("audio_cache.json");
    tokio::fs::write(&path, "not json {{").await.unwrap();

    let cache = JsonFileCache::load(path.clone()).await.unwrap();

    assert_eq!(cache.lookup(&fingerprint()).await.unwrap(), None);
    let aside = dir.path().join("audio_cache.json.corrupt");
    let preserved = tokio::fs::read_to_string(aside).await.unwrap();
    assert_eq!(preserved, "not json {{");
    assert!(!path.exists());
}

#[tokio::test]
async fn given_second_corrupt_file_when_loading_then_earlier_aside_copy_survives() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("audio_cache.json");

    tokio::fs::write(&path, "first corrupt {{").await.unwrap();
    JsonFileCache::load(path.clone()).await.unwrap();

    tokio::fs::write(&path, "second corrupt {{").await.unwrap();
    JsonFileCache::load(path.clone()).await.unwrap();

    let first = tokio::fs::read_to_string(dir.path().join("audio_cache.json.corrupt"))
        .await
        .unwrap();
    assert_eq!(first, "first corrupt {{");
    let second = tokio::fs::read_to_string(dir.path().join("audio_cache.json.corrupt.1"))
        .await
        .unwrap();
    assert_eq!(second, "second corrupt {{");
}

#[tokio::test]
async fn given_stored_record_then_cache_file_is_well_formed_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("audio_cache.json");

    let cache = JsonFileCache::load(path.clone()).await.unwrap();
    cache.store(&fingerprint(), &success_record()).await.unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed.is_object());
    // The temp file used for the atomic write must not linger.
    assert!(!dir.path().join("audio_cache.json.tmp").exists());
}
