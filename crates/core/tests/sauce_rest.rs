use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{post, put};
use fixture::{ArtifactUploader, Credentials, FixtureError, JobReporter, SauceRest, SessionId};

#[derive(Debug, Clone)]
struct Received {
	path: String,
	authorization: Option<String>,
	content_type: Option<String>,
	overwrite: Option<String>,
	body: Vec<u8>,
}

#[derive(Clone, Default)]
struct Mock {
	received: Arc<Mutex<Vec<Received>>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
	headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

async fn upload(
	State(mock): State<Mock>,
	Path((user, file)): Path<(String, String)>,
	Query(query): Query<HashMap<String, String>>,
	headers: HeaderMap,
	body: Bytes,
) -> StatusCode {
	let authorization = header(&headers, "authorization");
	let authorized = authorization.as_deref() == Some("Basic dTE6azE=");
	mock.received.lock().unwrap().push(Received {
		path: format!("/rest/v1/storage/{user}/{file}"),
		authorization,
		content_type: header(&headers, "content-type"),
		overwrite: query.get("overwrite").cloned(),
		body: body.to_vec(),
	});
	if authorized { StatusCode::OK } else { StatusCode::UNAUTHORIZED }
}

async fn job_status(State(mock): State<Mock>, Path((user, id)): Path<(String, String)>, headers: HeaderMap, body: Bytes) -> StatusCode {
	mock.received.lock().unwrap().push(Received {
		path: format!("/rest/v1/{user}/jobs/{id}"),
		authorization: header(&headers, "authorization"),
		content_type: header(&headers, "content-type"),
		overwrite: None,
		body: body.to_vec(),
	});
	StatusCode::OK
}

async fn serve() -> (String, Mock) {
	let mock = Mock::default();
	let app = Router::new()
		.route("/rest/v1/storage/{user}/{file}", post(upload))
		.route("/rest/v1/{user}/jobs/{id}", put(job_status))
		.with_state(mock.clone());

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	(format!("http://{addr}"), mock)
}

fn artifact_dir() -> tempfile::TempDir {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("UICatalog6.1.app.zip"), b"PK\x03\x04fake").unwrap();
	dir
}

#[tokio::test]
async fn upload_posts_artifact_with_basic_auth() {
	let (base, mock) = serve().await;
	let rest = SauceRest::new(&base, Duration::from_secs(5)).unwrap();
	let dir = artifact_dir();

	let reference = rest
		.upload(dir.path(), "UICatalog6.1.app.zip", &Credentials::new("u1", "k1"))
		.await
		.unwrap();
	assert_eq!(reference.as_str(), "sauce-storage:UICatalog6.1.app.zip");

	let received = mock.received.lock().unwrap().clone();
	assert_eq!(received.len(), 1);
	let req = &received[0];
	assert_eq!(req.path, "/rest/v1/storage/u1/UICatalog6.1.app.zip");
	assert_eq!(req.overwrite.as_deref(), Some("true"));
	assert_eq!(req.content_type.as_deref(), Some("application/octet-stream"));
	assert_eq!(req.body, b"PK\x03\x04fake");
}

#[tokio::test]
async fn rejected_credentials_are_an_upload_error() {
	let (base, _mock) = serve().await;
	let rest = SauceRest::new(&base, Duration::from_secs(5)).unwrap();
	let dir = artifact_dir();

	let err = rest
		.upload(dir.path(), "UICatalog6.1.app.zip", &Credentials::new("u1", "wrong"))
		.await
		.unwrap_err();
	match err {
		FixtureError::Upload { artifact, message } => {
			assert_eq!(artifact, "UICatalog6.1.app.zip");
			assert!(message.contains("401"), "unexpected message: {message}");
			assert!(!message.contains("wrong"));
		}
		other => panic!("expected upload error, got {other:?}"),
	}
}

#[tokio::test]
async fn missing_artifact_fails_without_network_call() {
	let (base, mock) = serve().await;
	let rest = SauceRest::new(&base, Duration::from_secs(5)).unwrap();
	let dir = tempfile::tempdir().unwrap();

	let err = rest
		.upload(dir.path(), "UICatalog6.1.app.zip", &Credentials::new("u1", "k1"))
		.await
		.unwrap_err();
	assert!(matches!(err, FixtureError::Upload { .. }));
	assert!(mock.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn job_status_is_put_as_json() {
	let (base, mock) = serve().await;
	let rest = SauceRest::new(&base, Duration::from_secs(5)).unwrap();
	let id = SessionId::new("5f1e0a9c").unwrap();

	rest.report(&Credentials::new("u1", "k1"), &id, true).await.unwrap();

	let received = mock.received.lock().unwrap().clone();
	let req = &received[0];
	assert_eq!(req.path, "/rest/v1/u1/jobs/5f1e0a9c");
	assert_eq!(req.authorization.as_deref(), Some("Basic dTE6azE="));
	assert_eq!(req.content_type.as_deref(), Some("application/json"));
	let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
	assert_eq!(body, serde_json::json!({ "passed": true }));
}
