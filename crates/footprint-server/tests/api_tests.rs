use application::FootprintService;
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::Utc;
use domain::recommendation::NO_DATA_MESSAGE;
use domain::{
    AdvisorySource, DomainError, NewSectorRecord, ReportRepository, SectorKind, SectorRecord,
    SectorRepository,
};
use footprint_server::{api::create_router, setup_app_state};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

const REPORT: &str = "6f1c2a8e-4b7d-4f0e-9a51-3c2d1e0f9b8a";

#[derive(Default)]
struct InMemorySectorRepository {
    rows: Mutex<Vec<(i64, NewSectorRecord)>>,
}

#[async_trait]
impl SectorRepository for InMemorySectorRepository {
    async fn upsert(&self, record: &NewSectorRecord) -> Result<i64, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some((id, existing)) = rows
            .iter_mut()
            .find(|(_, r)| r.kind() == record.kind() && r.report_uuid == record.report_uuid)
        {
            existing.details = record.details.clone();
            return Ok(*id);
        }
        let id = rows.len() as i64 + 1;
        rows.push((id, record.clone()));
        Ok(id)
    }

    async fn find_by_company(
        &self,
        kind: SectorKind,
        company_name: &str,
    ) -> Result<Vec<SectorRecord>, DomainError> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .filter(|(_, r)| r.kind() == kind && r.company_name == company_name)
            .map(|(id, r)| {
                SectorRecord::from_stored(
                    *id,
                    r.report_uuid,
                    r.city.clone(),
                    r.company_name.clone(),
                    Utc::now(),
                    r.details.clone(),
                )
            })
            .collect()
    }
}

struct UnavailableSectorRepository;

#[async_trait]
impl SectorRepository for UnavailableSectorRepository {
    async fn upsert(&self, record: &NewSectorRecord) -> Result<i64, DomainError> {
        Err(DomainError::persistence(
            record.kind().as_str(),
            record.report_uuid.to_string(),
            "pool timed out",
        ))
    }

    async fn find_by_company(
        &self,
        kind: SectorKind,
        company_name: &str,
    ) -> Result<Vec<SectorRecord>, DomainError> {
        Err(DomainError::persistence(
            kind.as_str(),
            company_name,
            "pool timed out",
        ))
    }
}

struct FixedReportRepository;

#[async_trait]
impl ReportRepository for FixedReportRepository {
    async fn create(&self) -> Result<Uuid, DomainError> {
        Ok(Uuid::parse_str(REPORT).unwrap())
    }
}

struct StaticAdvisory;

#[async_trait]
impl AdvisorySource for StaticAdvisory {
    async fn load(&self, kind: SectorKind) -> String {
        format!("Cut {} emissions.", kind.heading())
    }
}

fn app_with(sectors: Arc<dyn SectorRepository>) -> Router {
    let service = FootprintService::new(
        Arc::new(FixedReportRepository),
        sectors,
        Arc::new(StaticAdvisory),
    );
    create_router(setup_app_state(service))
}

fn app() -> Router {
    app_with(Arc::new(InMemorySectorRepository::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn energy_body(company: &str) -> Value {
    json!({
        "report_uuid": REPORT,
        "average_monthly_bill": 100.0,
        "average_natural_gas_bill": 50.0,
        "monthly_fuel_bill": 40.0,
        "city": "Oslo",
        "company_name": company
    })
}

fn waste_body(company: &str) -> Value {
    json!({
        "report_uuid": REPORT,
        "waste_kg": 100.0,
        "recycled_or_composted_kg": 50.0,
        "waste_category": "RECYCLABLE",
        "company_name": company
    })
}

#[tokio::test]
async fn test_root_and_health() {
    let app = app();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Server is running");

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_create_report_returns_created() {
    let (status, body) = send(&app(), post_json("/reports", json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["report_uuid"], REPORT);
}

#[tokio::test]
async fn test_post_then_get_sector_records() {
    let app = app();

    let (status, body) = send(&app, post_json("/energy_usage", energy_body("Acme"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record_id"], 1);

    let (status, body) = send(&app, get("/energy_usage?company_name=Acme")).await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["company_name"], "Acme");
    assert_eq!(data[0]["city"], "Oslo");
    assert_eq!(data[0]["average_monthly_bill"], 100.0);
    assert_eq!(data[0]["carbon_footprint"], 1146.0);
}

#[tokio::test]
async fn test_get_without_records_is_empty_list() {
    let (status, body) = send(&app(), get("/business_travel?company_name=Nobody")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_missing_company_name_is_bad_request() {
    let app = app();

    for uri in ["/waste_sector", "/recommendation", "/recommendation?company_name="] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].as_str().unwrap().contains("company_name"));
    }
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let mut body = waste_body("Acme");
    body.as_object_mut().unwrap().remove("waste_category");

    let (status, body) = send(&app(), post_json("/waste_sector", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: waste_category");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/business_travel")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_zero_efficiency_is_rejected() {
    let body = json!({
        "report_uuid": REPORT,
        "kilometers_per_year": 1000,
        "average_efficiency_per_100km": 0,
        "company_name": "Acme"
    });

    let (status, _) = send(&app(), post_json("/business_travel", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendation_picks_highest_sector() {
    let app = app();
    send(&app, post_json("/energy_usage", energy_body("Acme"))).await;
    send(&app, post_json("/waste_sector", waste_body("Acme"))).await;

    let (status, body) = send(&app, get("/recommendation?company_name=Acme")).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["highest_carbon_footprint_sector"], "energy_usage");
    assert_eq!(data["carbon_footprint"], "energy_usage");
    assert_eq!(data["energy_usage"], 1146.0);
    assert_eq!(data["waste_sector"], 342.0);
    assert_eq!(data["business_travel"], Value::Null);
    assert_eq!(data["total_carbon_footprint"], 1488.0);
    assert!(data["EU_law"].as_str().unwrap().starts_with("https://"));

    let text = data["recommendation"].as_str().unwrap();
    assert!(text.contains("Energy Usage"));
    assert!(text.contains("Cut Energy Usage emissions."));
}

#[tokio::test]
async fn test_recommendation_without_data() {
    let (status, body) = send(&app(), get("/recommendation?company_name=Nobody")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "message": NO_DATA_MESSAGE } }));
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = app_with(Arc::new(UnavailableSectorRepository));

    let (status, body) = send(&app, get("/recommendation?company_name=Acme")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("pool timed out"));

    let (status, _) = send(&app, post_json("/energy_usage", energy_body("Acme"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_stored_zero_efficiency_is_unprocessable() {
    let repo = Arc::new(InMemorySectorRepository::default());
    let body = json!({
        "report_uuid": REPORT,
        "kilometers_per_year": 1000,
        "average_efficiency_per_100km": 0,
        "company_name": "Acme"
    });
    let record = footprint_server::fields::parse_sector_record(SectorKind::BusinessTravel, &body)
        .unwrap();
    repo.upsert(&record).await.unwrap();
    let app = app_with(repo);

    for uri in ["/business_travel?company_name=Acme", "/recommendation?company_name=Acme"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert!(body["error"].as_str().unwrap().contains("average_efficiency_per_100km"));
    }
}
