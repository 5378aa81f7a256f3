//! Gateway tests against a local HTTP backend
//!
//! The backend is a small actix-web app bound to an ephemeral port on its
//! own thread, so the real reqwest client goes over the wire.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use actix_multipart::Multipart;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use futures_util::StreamExt;
use parking_lot::Mutex;
use serde_json::{Value, json};
use template_desk::config::{GatewayMode, StaticConfig};
use template_desk::errors::TemplateError;
use template_desk::gateway::{TemplateGateway, build_gateway};
use template_desk::models::{ImportOutcome, TemplateFields, Thumbnail};

const CSRF_TOKEN: &str = "csrf-test-token";
const ARCHIVE: &[u8] = b"\x1f\x8bfake course archive";

#[derive(Default)]
struct Backend {
    records: Mutex<Vec<Value>>,
    next_id: AtomicU64,
    csrf_seen: Mutex<Vec<Option<String>>>,
    last_form: Mutex<HashMap<String, Vec<u8>>>,
    last_import: Mutex<Option<(u64, Value)>>,
}

impl Backend {
    fn with_records(records: Vec<Value>) -> Arc<Self> {
        let backend = Self::default();
        backend.next_id.store(50, Ordering::SeqCst);
        *backend.records.lock() = records;
        Arc::new(backend)
    }

    fn record_csrf(&self, req: &HttpRequest) {
        let token = req
            .headers()
            .get("X-CSRFToken")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.csrf_seen.lock().push(token);
    }

    fn form_text(&self, name: &str) -> Option<String> {
        self.last_form
            .lock()
            .get(name)
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }
}

fn record(id: u64, name: &str, template: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("About {}", name),
        "course_template": template,
        "thumbnail": null,
    })
}

async fn read_fields(mut payload: Multipart) -> actix_web::Result<HashMap<String, Vec<u8>>> {
    let mut fields = HashMap::new();
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().unwrap_or("").to_string();
        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk?);
        }
        fields.insert(name, data);
    }
    Ok(fields)
}

fn record_from_form(id: u64, fields: &HashMap<String, Vec<u8>>) -> Value {
    let text = |name: &str| {
        fields
            .get(name)
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .unwrap_or_default()
    };
    json!({
        "id": id,
        "name": text("name"),
        "description": text("description"),
        "course_template": text("course_template"),
        "thumbnail": fields.contains_key("thumbnail").then(|| format!("/media/thumb-{}.png", id)),
    })
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"detail": "Not found."}))
}

async fn list_templates(req: HttpRequest, backend: web::Data<Backend>) -> HttpResponse {
    backend.record_csrf(&req);
    let records = backend.records.lock().clone();
    HttpResponse::Ok().json(json!({"count": records.len(), "results": records}))
}

async fn create_template(
    req: HttpRequest,
    backend: web::Data<Backend>,
    payload: Multipart,
) -> actix_web::Result<HttpResponse> {
    backend.record_csrf(&req);
    let fields = read_fields(payload).await?;
    let id = backend.next_id.fetch_add(1, Ordering::SeqCst);
    let created = record_from_form(id, &fields);
    backend.records.lock().push(created.clone());
    *backend.last_form.lock() = fields;
    Ok(HttpResponse::Created().json(created))
}

async fn update_template(
    req: HttpRequest,
    backend: web::Data<Backend>,
    path: web::Path<u64>,
    payload: Multipart,
) -> actix_web::Result<HttpResponse> {
    backend.record_csrf(&req);
    let id = path.into_inner();
    let fields = read_fields(payload).await?;
    let updated = record_from_form(id, &fields);
    *backend.last_form.lock() = fields;

    let mut records = backend.records.lock();
    match records.iter_mut().find(|r| r["id"].as_u64() == Some(id)) {
        Some(slot) => {
            *slot = updated.clone();
            Ok(HttpResponse::Ok().json(updated))
        }
        None => Ok(not_found()),
    }
}

async fn delete_template(
    req: HttpRequest,
    backend: web::Data<Backend>,
    path: web::Path<u64>,
) -> HttpResponse {
    backend.record_csrf(&req);
    let id = path.into_inner();
    let mut records = backend.records.lock();
    let before = records.len();
    records.retain(|r| r["id"].as_u64() != Some(id));
    if records.len() == before {
        not_found()
    } else {
        HttpResponse::NoContent().finish()
    }
}

async fn download_archive(path: web::Path<String>) -> HttpResponse {
    if path.as_str() == "missing.tar.gz" {
        return HttpResponse::NotFound().finish();
    }
    HttpResponse::Ok()
        .content_type("application/gzip")
        .body(ARCHIVE)
}

async fn template_feed() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {"courses_name": "Intro", "zip_url": "https://cdn.example.com/intro.zip",
         "metadata": {"title": "Intro Course", "description": "Start here", "thumbnail": null}},
        {"courses_name": "Advanced", "zip_url": "https://cdn.example.com/advanced.zip"}
    ]))
}

async fn import_course(
    req: HttpRequest,
    backend: web::Data<Backend>,
    path: web::Path<u64>,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.record_csrf(&req);
    let id = path.into_inner();
    if id == 99 {
        return HttpResponse::InternalServerError().json(json!({"error": "ingest failed"}));
    }
    *backend.last_import.lock() = Some((id, body.into_inner()));
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Start the backend and return its base URL
fn start_backend(backend: Arc<Backend>) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        actix_rt::System::new().block_on(async move {
            let data = web::Data::from(backend);
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(data.clone())
                    .route("/api/templates/", web::get().to(list_templates))
                    .route("/api/templates/", web::post().to(create_template))
                    .route("/api/templates/{id}/", web::put().to(update_template))
                    .route("/api/templates/{id}/", web::delete().to(delete_template))
                    .route("/files/{name}", web::get().to(download_archive))
                    .route("/static/templates.json", web::get().to(template_feed))
                    .route(
                        "/api/course_import_api/import/{id}/",
                        web::post().to(import_course),
                    )
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind test backend");

            tx.send(server.addrs()[0]).expect("report backend address");
            server.run().await.expect("run test backend");
        });
    });
    let addr = rx.recv().expect("backend address");
    format!("http://{}", addr)
}

fn crud_config(base_url: &str, download_dir: &Path) -> StaticConfig {
    let mut config = StaticConfig::default();
    config.api.base_url = base_url.to_string();
    config.api.csrf_token = CSRF_TOKEN.to_string();
    config.gateway.download_dir = download_dir.display().to_string();
    config
}

fn feed_config(base_url: &str) -> StaticConfig {
    let mut config = StaticConfig::default();
    config.api.base_url = base_url.to_string();
    config.api.csrf_token = CSRF_TOKEN.to_string();
    config.gateway.mode = GatewayMode::Feed;
    config.gateway.feed_url = format!("{}/static/templates.json", base_url);
    config.gateway.course_url_template = "/courses/{id}/outline".to_string();
    config
}

fn fields(name: &str) -> TemplateFields {
    TemplateFields {
        name: name.to_string(),
        description: format!("{} description", name),
        package_url: format!("https://cdn.example.com/{}.tar.gz", name.to_lowercase()),
        thumbnail: None,
    }
}

#[tokio::test]
async fn test_crud_list_maps_records() {
    let backend = Backend::with_records(vec![
        record(1, "Intro", "https://cdn.example.com/intro.tar.gz"),
        record(2, "Advanced", "https://cdn.example.com/advanced.tar.gz"),
    ]);
    let base = start_backend(backend.clone());
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let templates = gateway.list().await.unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].id, "1");
    assert_eq!(templates[0].display_name, "Intro");
    assert_eq!(
        templates[0].package_url,
        "https://cdn.example.com/intro.tar.gz"
    );
    assert_eq!(templates[1].description(), Some("About Advanced"));
    assert_eq!(
        backend.csrf_seen.lock().as_slice(),
        &[Some(CSRF_TOKEN.to_string())]
    );
}

#[tokio::test]
async fn test_crud_create_sends_multipart_fields() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend.clone());
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let mut new_fields = fields("Rust");
    new_fields.thumbnail = Some(Thumbnail {
        file_name: "cover.png".into(),
        mime: "image/png".into(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    });
    let created = gateway.create(&new_fields).await.unwrap();

    assert_eq!(created.id, "50");
    assert_eq!(created.display_name, "Rust");
    assert_eq!(created.thumbnail_url(), Some("/media/thumb-50.png"));
    assert_eq!(backend.form_text("name").as_deref(), Some("Rust"));
    assert_eq!(
        backend.form_text("description").as_deref(),
        Some("Rust description")
    );
    assert_eq!(
        backend.form_text("course_template").as_deref(),
        Some("https://cdn.example.com/rust.tar.gz")
    );
    assert_eq!(
        backend.last_form.lock().get("thumbnail").cloned(),
        Some(vec![0x89, b'P', b'N', b'G'])
    );

    let listed = gateway.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(
        backend
            .csrf_seen
            .lock()
            .iter()
            .all(|t| t.as_deref() == Some(CSRF_TOKEN))
    );
}

#[tokio::test]
async fn test_crud_create_without_thumbnail_omits_part() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend.clone());
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let created = gateway.create(&fields("Plain")).await.unwrap();
    assert!(created.thumbnail_url().is_none());
    assert!(!backend.last_form.lock().contains_key("thumbnail"));
}

#[tokio::test]
async fn test_crud_update_replaces_record() {
    let backend = Backend::with_records(vec![record(
        7,
        "Old",
        "https://cdn.example.com/old.tar.gz",
    )]);
    let base = start_backend(backend.clone());
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let updated = gateway.update("7", &fields("Renamed")).await.unwrap();
    assert_eq!(updated.id, "7");
    assert_eq!(updated.display_name, "Renamed");

    let listed = gateway.list().await.unwrap();
    assert_eq!(listed[0].display_name, "Renamed");
    assert_eq!(
        listed[0].package_url,
        "https://cdn.example.com/renamed.tar.gz"
    );
}

#[tokio::test]
async fn test_crud_update_missing_is_http_error() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend);
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let err = gateway.update("8", &fields("Ghost")).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_crud_delete_then_repeat_is_not_found() {
    let backend = Backend::with_records(vec![
        record(1, "Keep", "https://cdn.example.com/keep.tar.gz"),
        record(2, "Drop", "https://cdn.example.com/drop.tar.gz"),
    ]);
    let base = start_backend(backend.clone());
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    gateway.remove("2").await.unwrap();
    let remaining: Vec<_> = gateway
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(remaining, vec!["1"]);

    match gateway.remove("2").await {
        Err(TemplateError::Http { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found."));
        }
        other => panic!("expected HTTP 404, got {:?}", other),
    }
}

#[tokio::test]
async fn test_crud_import_downloads_archive() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend);
    let dir = tempfile::tempdir().unwrap();
    let target_dir = dir.path().join("downloads");
    let gateway = build_gateway(&crud_config(&base, &target_dir)).unwrap();

    let package_url = format!("{}/files/rust-101.tar.gz", base);
    let outcome = gateway.trigger_import("3", &package_url).await.unwrap();

    let expected = target_dir.join("rust-101.tar.gz");
    assert_eq!(outcome, ImportOutcome::Downloaded(expected.clone()));
    assert_eq!(std::fs::read(&expected).unwrap(), ARCHIVE);
    assert!(!target_dir.join("rust-101.tar.gz.part").exists());
    let leftovers: Vec<_> = std::fs::read_dir(&target_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "part"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_crud_import_failure_leaves_no_file() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend);
    let dir = tempfile::tempdir().unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let package_url = format!("{}/files/missing.tar.gz", base);
    let err = gateway.trigger_import("4", &package_url).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!dir.path().join("missing.tar.gz").exists());
}

#[tokio::test]
async fn test_crud_import_failed_rename_removes_partial_file() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend);
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory in place of the archive makes the final rename fail
    let blocker = dir.path().join("rust-101.tar.gz");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), b"x").unwrap();
    let gateway = build_gateway(&crud_config(&base, dir.path())).unwrap();

    let package_url = format!("{}/files/rust-101.tar.gz", base);
    let err = gateway.trigger_import("5", &package_url).await.unwrap_err();
    assert!(matches!(err, TemplateError::FileOperation(_)));

    let mut names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["rust-101.tar.gz"]);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let dir = tempfile::tempdir().unwrap();
    // Port 9 (discard) is not served in the test environment
    let gateway = build_gateway(&crud_config("http://127.0.0.1:9", dir.path())).unwrap();
    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, TemplateError::Network(_)));
}

#[tokio::test]
async fn test_feed_list_assigns_positional_ids() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend);
    let gateway = build_gateway(&feed_config(&base)).unwrap();
    assert_eq!(gateway.name(), "feed");

    let templates = gateway.list().await.unwrap();
    let ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(templates[0].title(), Some("Intro Course"));
    assert_eq!(templates[1].package_url, "https://cdn.example.com/advanced.zip");
}

#[tokio::test]
async fn test_feed_import_posts_file_url_and_navigates() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend.clone());
    let gateway = build_gateway(&feed_config(&base)).unwrap();

    let outcome = gateway
        .trigger_import("2", "https://cdn.example.com/advanced.zip")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ImportOutcome::Navigate("/courses/2/outline".to_string())
    );

    let (id, body) = backend.last_import.lock().clone().unwrap();
    assert_eq!(id, 2);
    assert_eq!(body, json!({"file_url": "https://cdn.example.com/advanced.zip"}));
    assert_eq!(
        backend.csrf_seen.lock().last().cloned().flatten().as_deref(),
        Some(CSRF_TOKEN)
    );
}

#[tokio::test]
async fn test_feed_import_failure_is_http_error() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend.clone());
    let gateway = build_gateway(&feed_config(&base)).unwrap();

    let err = gateway
        .trigger_import("99", "https://cdn.example.com/x.zip")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(backend.last_import.lock().is_none());
}

#[tokio::test]
async fn test_feed_mutations_never_reach_backend() {
    let backend = Backend::with_records(Vec::new());
    let base = start_backend(backend.clone());
    let gateway = build_gateway(&feed_config(&base)).unwrap();

    assert!(matches!(
        gateway.create(&fields("Nope")).await,
        Err(TemplateError::Unsupported(_))
    ));
    assert!(matches!(
        gateway.remove("1").await,
        Err(TemplateError::Unsupported(_))
    ));
    assert!(backend.csrf_seen.lock().is_empty());
}
