//! Shared harness for HTTP-level tests.
//!
//! Builds the production router over an in-memory plan store and a
//! scripted analysis client, and mints tokens with the test secret.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use gymplan_api::auth::jwt::{Claims, JwtConfig};
use gymplan_api::config::ServerConfig;
use gymplan_api::router::build_app_router;
use gymplan_api::state::AppState;
use gymplan_core::memory::MemoryPlanStore;
use gymplan_core::service::TrainingPlanService;
use gymplan_core::types::DbId;
use gymplan_openai::{
    FileAnalysis, FileDeletion, FileUpload, OpenAiError, StructuredOutput, StructuredResponse,
    UploadFile, UploadStatus,
};
use gymplan_pipeline::PdfImporter;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";
pub const MAX_UPLOAD_BYTES: usize = 1024;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4321".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: MAX_UPLOAD_BYTES,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            audience: None,
        },
    }
}

/// Analysis client answering every request with a fixed parsed output.
pub struct FakeAnalysis {
    pub parsed_output: Mutex<Option<Value>>,
    pub uploads: Mutex<Vec<String>>,
}

impl FakeAnalysis {
    pub fn answering(parsed_output: Option<Value>) -> Self {
        Self {
            parsed_output: Mutex::new(parsed_output),
            uploads: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FileAnalysis for FakeAnalysis {
    async fn upload_file(&self, file: &UploadFile) -> FileUpload {
        self.uploads.lock().unwrap().push(file.filename.clone());
        FileUpload {
            file_id: "file-test".to_string(),
            filename: file.filename.clone(),
            status: UploadStatus::Success,
            error: None,
        }
    }

    async fn create_structured_response(
        &self,
        _file_id: &str,
        _system_prompt: &str,
        _user_prompt: &str,
        _output: &StructuredOutput,
    ) -> Result<StructuredResponse, OpenAiError> {
        Ok(StructuredResponse {
            text: String::new(),
            usage: None,
            parsed_output: self.parsed_output.lock().unwrap().clone(),
        })
    }

    async fn delete_file(&self, _file_id: &str) -> FileDeletion {
        FileDeletion {
            success: true,
            error: None,
        }
    }
}

/// The router plus handles on its collaborators.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryPlanStore>,
    pub analysis: Arc<FakeAnalysis>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(FakeAnalysis::answering(None))
}

pub fn build_test_app_with(analysis: FakeAnalysis) -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryPlanStore::new());
    let analysis = Arc::new(analysis);

    let state = AppState {
        plans: Arc::new(TrainingPlanService::new(store.clone())),
        pdf_importer: Arc::new(PdfImporter::new(analysis.clone())),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        analysis,
    }
}

/// Sign a token for `user_id` valid for fifteen minutes.
pub fn token_for(user_id: DbId) -> String {
    let claims = Claims {
        sub: user_id,
        exp: chrono::Utc::now().timestamp() + 900,
        aud: Some("authenticated".to_string()),
        email: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str, user: DbId) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {}", token_for(user)))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &TestApp, uri: &str, user: DbId) -> Response<Body> {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {}", token_for(user)))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &TestApp, uri: &str, user: DbId, body: &Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("authorization", format!("Bearer {}", token_for(user)))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

const BOUNDARY: &str = "gymplan-test-boundary";

/// POST a single-part multipart form.
pub async fn post_file(
    app: &TestApp,
    uri: &str,
    user: DbId,
    field: &str,
    filename: &str,
    contents: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header("authorization", format!("Bearer {}", token_for(user)))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
