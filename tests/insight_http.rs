use async_trait::async_trait;
use gluco_track::errors::Result;
use gluco_track::insight::TextGenerator;
use gluco_track::{router, AppState, ReadingRepository};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct InsightStatus {
    state: String,
    text: Option<String>,
}

/// Holds every request open until `release` is notified.
struct GatedGenerator {
    release: Arc<Notify>,
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok("Readings look steady.".to_string())
    }

    fn name(&self) -> &str {
        "gated"
    }
}

async fn serve(generator: Option<Arc<dyn TextGenerator>>) -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repo = ReadingRepository::load(dir.path().join("readings.json")).await;
    let app = router(AppState::new(repo, generator));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), dir)
}

async fn add_reading(client: &Client, base_url: &str, value: f64) {
    let response = client
        .post(format!("{base_url}/api/readings"))
        .json(&serde_json::json!({ "value": value, "context": "RANDOM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn second_insight_request_while_pending_is_a_conflict() {
    let release = Arc::new(Notify::new());
    let generator = Arc::new(GatedGenerator {
        release: Arc::clone(&release),
        calls: AtomicUsize::new(0),
    });
    let backend: Arc<dyn TextGenerator> = generator.clone();
    let (base_url, _dir) = serve(Some(backend)).await;
    let client = Client::new();
    let insight_url = format!("{base_url}/api/insight");

    add_reading(&client, &base_url, 132.0).await;

    let first = client.post(&insight_url).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::ACCEPTED);

    let second = client.post(&insight_url).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let pending: InsightStatus = client.get(&insight_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(pending.state, "pending");

    // The pending request survives a dismiss.
    let dismissed: InsightStatus = client.delete(&insight_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(dismissed.state, "pending");

    release.notify_one();

    let deadline = Instant::now() + Duration::from_secs(3);
    let settled = loop {
        let status: InsightStatus = client.get(&insight_url).send().await.unwrap().json().await.unwrap();
        if status.state != "pending" {
            break status;
        }
        assert!(Instant::now() < deadline, "insight never settled");
        sleep(Duration::from_millis(20)).await;
    };
    assert_eq!(settled.state, "ready");
    assert_eq!(settled.text.as_deref(), Some("Readings look steady."));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn insight_without_credential_is_unavailable() {
    let (base_url, _dir) = serve(None).await;
    let client = Client::new();
    let insight_url = format!("{base_url}/api/insight");

    add_reading(&client, &base_url, 88.0).await;

    let response = client.post(&insight_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.text().await.unwrap().contains("GEMINI_API_KEY"));

    let status: InsightStatus = client.get(&insight_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(status.state, "idle");
}

#[tokio::test]
async fn insight_on_empty_collection_never_reaches_backend() {
    let generator = Arc::new(GatedGenerator {
        release: Arc::new(Notify::new()),
        calls: AtomicUsize::new(0),
    });
    let backend: Arc<dyn TextGenerator> = generator.clone();
    let (base_url, _dir) = serve(Some(backend)).await;
    let client = Client::new();

    let response = client.post(format!("{base_url}/api/insight")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let status: InsightStatus = response.json().await.unwrap();
    assert_eq!(status.state, "idle");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}
