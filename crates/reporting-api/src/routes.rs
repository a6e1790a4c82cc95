use crate::error::ApiError;
use crate::schemas::{
    BannerResponse, CreateOrderRequest, CreateOrderResponse, DateRangeParams, TopProductsResponse,
    TopSuppliersResponse, TotalSpentResponse,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use reporting_db::repositories::OrderRepository;
use reporting_db::DatabasePool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

pub const SERVICE_BANNER: &str = "Order reporting service";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabasePool>,
}

pub async fn index() -> Json<BannerResponse> {
    info!("Request to the service banner");
    Json(BannerResponse {
        message: SERVICE_BANNER,
    })
}

/// GET /total_spent — sum of quantity * price over the date range
pub async fn total_spent(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> crate::Result<Json<TotalSpentResponse>> {
    let Query(range) = params?;
    let started = Instant::now();
    info!(
        start_date = %range.start_date,
        end_date = %range.end_date,
        "Total spent requested"
    );

    match OrderRepository::total_spent(state.db.inner(), range.start_date, range.end_date).await {
        Ok(Some(total)) => {
            let elapsed = started.elapsed();
            reporting_metrics::counters::http_requests("total_spent", "ok");
            reporting_metrics::histograms::request_duration("total_spent", elapsed);
            info!(
                total_spent = total,
                elapsed_ms = elapsed.as_millis() as u64,
                "Total spent computed"
            );
            Ok(Json(TotalSpentResponse { total_spent: total }))
        }
        Ok(None) => {
            reporting_metrics::counters::http_requests("total_spent", "not_found");
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "No orders in the requested period"
            );
            Err(ApiError::NotFound)
        }
        Err(e) => {
            reporting_metrics::counters::http_requests("total_spent", "error");
            error!(
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Failed to compute total spent"
            );
            Err(e.into())
        }
    }
}

/// GET /top_products — top 10 supplier groups by summed quantity
pub async fn top_products(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> crate::Result<Json<TopProductsResponse>> {
    let Query(range) = params?;
    let started = Instant::now();
    info!(
        start_date = %range.start_date,
        end_date = %range.end_date,
        "Top products requested"
    );

    match OrderRepository::top_products(state.db.inner(), range.start_date, range.end_date).await {
        Ok(products) if products.is_empty() => {
            reporting_metrics::counters::http_requests("top_products", "not_found");
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "No orders in the requested period"
            );
            Err(ApiError::NotFound)
        }
        Ok(products) => {
            let elapsed = started.elapsed();
            reporting_metrics::counters::http_requests("top_products", "ok");
            reporting_metrics::histograms::request_duration("top_products", elapsed);
            info!(
                groups = products.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Top products computed"
            );
            Ok(Json(TopProductsResponse {
                top_products: products.into_iter().map(Into::into).collect(),
            }))
        }
        Err(e) => {
            reporting_metrics::counters::http_requests("top_products", "error");
            error!(
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Failed to compute top products"
            );
            Err(e.into())
        }
    }
}

/// GET /top_suppliers — top 5 supplier groups by order count
pub async fn top_suppliers(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> crate::Result<Json<TopSuppliersResponse>> {
    let Query(range) = params?;
    let started = Instant::now();
    info!(
        start_date = %range.start_date,
        end_date = %range.end_date,
        "Top suppliers requested"
    );

    match OrderRepository::top_suppliers(state.db.inner(), range.start_date, range.end_date).await {
        Ok(suppliers) if suppliers.is_empty() => {
            reporting_metrics::counters::http_requests("top_suppliers", "not_found");
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "No orders in the requested period"
            );
            Err(ApiError::NotFound)
        }
        Ok(suppliers) => {
            let elapsed = started.elapsed();
            reporting_metrics::counters::http_requests("top_suppliers", "ok");
            reporting_metrics::histograms::request_duration("top_suppliers", elapsed);
            info!(
                groups = suppliers.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Top suppliers computed"
            );
            Ok(Json(TopSuppliersResponse {
                top_suppliers: suppliers.into_iter().map(Into::into).collect(),
            }))
        }
        Err(e) => {
            reporting_metrics::counters::http_requests("top_suppliers", "error");
            error!(
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Failed to compute top suppliers"
            );
            Err(e.into())
        }
    }
}

/// POST /create_order — synchronous single-row insert.
///
/// The response wording predates this implementation and is kept for client
/// compatibility; nothing is queued.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> crate::Result<Json<CreateOrderResponse>> {
    let Json(request) = payload?;
    let started = Instant::now();
    let order = request.into_order();
    info!(
        supplier_id = order.supplier_id,
        customer_id = order.customer_id,
        "Create order requested"
    );

    match OrderRepository::insert(state.db.inner(), &order).await {
        Ok(order_id) => {
            let elapsed = started.elapsed();
            reporting_metrics::counters::orders_created(1);
            reporting_metrics::counters::http_requests("create_order", "ok");
            reporting_metrics::histograms::db_insert_duration(elapsed);
            info!(
                order_id,
                elapsed_ms = elapsed.as_millis() as u64,
                "Order created"
            );
            Ok(Json(CreateOrderResponse {
                message: "Order added to queue",
                order_id,
            }))
        }
        Err(e) => {
            reporting_metrics::counters::http_requests("create_order", "error");
            error!(
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Failed to create order"
            );
            Err(e.into())
        }
    }
}
