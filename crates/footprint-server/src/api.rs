use axum::{
    Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use domain::SectorKind;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::error::ApiError;
use crate::fields::parse_sector_record;
use crate::state::AppState;

type ApiResult<T> = Result<T, ApiError>;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/reports", post(create_report))
        .route(
            "/energy_usage",
            get(get_energy_usage).post(create_energy_usage),
        )
        .route(
            "/waste_sector",
            get(get_waste_sector).post(create_waste_sector),
        )
        .route(
            "/business_travel",
            get(get_business_travel).post(create_business_travel),
        )
        .route("/recommendation", get(get_recommendation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct CompanyQuery {
    company_name: Option<String>,
}

impl CompanyQuery {
    fn company_name(self) -> ApiResult<String> {
        match self.company_name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(ApiError::BadRequest(
                "Missing required query parameter: company_name".into(),
            )),
        }
    }
}

async fn root() -> &'static str {
    "Server is running"
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn create_report(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let report_uuid = state.service.create_report().await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "report_uuid": report_uuid })),
    ))
}

async fn create_sector_record(
    state: &AppState,
    kind: SectorKind,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let record = parse_sector_record(kind, &body)?;
    let record_id = state.service.create_sector_record(record).await?;
    Ok(Json(json!({ "record_id": record_id })))
}

async fn get_sector_records(
    state: &AppState,
    kind: SectorKind,
    query: CompanyQuery,
) -> ApiResult<Json<Value>> {
    let company_name = query.company_name()?;
    let records = state
        .service
        .get_sector_records(kind, &company_name)
        .await?;
    Ok(Json(json!({ "data": records })))
}

async fn create_energy_usage(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    create_sector_record(&state, SectorKind::EnergyUsage, body).await
}

async fn create_waste_sector(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    create_sector_record(&state, SectorKind::WasteSector, body).await
}

async fn create_business_travel(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    create_sector_record(&state, SectorKind::BusinessTravel, body).await
}

async fn get_energy_usage(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> ApiResult<Json<Value>> {
    get_sector_records(&state, SectorKind::EnergyUsage, query).await
}

async fn get_waste_sector(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> ApiResult<Json<Value>> {
    get_sector_records(&state, SectorKind::WasteSector, query).await
}

async fn get_business_travel(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> ApiResult<Json<Value>> {
    get_sector_records(&state, SectorKind::BusinessTravel, query).await
}

async fn get_recommendation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> ApiResult<Json<Value>> {
    let company_name = query.company_name()?;
    info!(company_name = %company_name, "Recommendation requested");
    let result = state.service.get_recommendation(&company_name).await?;
    Ok(Json(json!({ "data": result })))
}
