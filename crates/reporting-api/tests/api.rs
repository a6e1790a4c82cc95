use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use reporting_api::{ApiConfig, ApiServer};
use reporting_core::types::NewOrder;
use reporting_db::repositories::OrderRepository;
use reporting_db::{DatabaseConfig, DatabasePool};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_router() -> (Router, Arc<DatabasePool>) {
    // One connection so every request sees the same in-memory database
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_secs: 5,
        busy_timeout_ms: 1000,
    };
    let pool = DatabasePool::new(&config).await.expect("in-memory pool");
    pool.migrate().await.expect("migrations");
    let pool = Arc::new(pool);

    let api_config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_prefix: String::new(),
        cors_enabled: false,
    };
    let server = ApiServer::new(api_config, pool.clone());
    (server.router(), pool)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn order_count(pool: &DatabasePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool.inner())
        .await
        .unwrap()
}

fn seed_order(supplier_id: i64, quantity: i64, price: f64, order_date: &str) -> NewOrder {
    NewOrder {
        supplier_id,
        customer_id: 1,
        quantity,
        price,
        order_date: chrono::NaiveDateTime::parse_from_str(order_date, "%Y-%m-%d %H:%M:%S")
            .unwrap(),
    }
}

#[tokio::test]
async fn banner_is_served_at_the_root() {
    let (router, _pool) = test_router().await;

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Order reporting service"));
}

#[tokio::test]
async fn reads_report_not_found_on_an_empty_store() {
    let (router, _pool) = test_router().await;
    let range = "start_date=2025-01-01&end_date=2025-01-31";

    for endpoint in ["/total_spent", "/top_products", "/top_suppliers"] {
        let (status, body) = get(&router, &format!("{endpoint}?{range}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "endpoint {endpoint}");
        assert_eq!(
            body["detail"],
            json!("No data available for the specified period")
        );
    }
}

#[tokio::test]
async fn created_order_is_visible_to_all_aggregates() {
    let (router, _pool) = test_router().await;

    let (status, body) = post_json(
        &router,
        "/create_order",
        json!({
            "supplier_id": 1,
            "customer_id": 2,
            "quantity": 100,
            "price": 150.75,
            "order_date": "2025-01-15"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Order added to queue"));
    assert!(body["order_id"].is_i64());

    let range = "start_date=2025-01-01&end_date=2025-01-31";

    let (status, body) = get(&router, &format!("/total_spent?{range}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_spent"], json!(15075.0));

    let (status, body) = get(&router, &format!("/top_suppliers?{range}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["top_suppliers"],
        json!([{ "supplier_id": 1, "total_orders": 1 }])
    );

    let (status, body) = get(&router, &format!("/top_products?{range}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["top_products"],
        json!([{ "product_id": 1, "total_sold": 100 }])
    );
}

#[tokio::test]
async fn non_numeric_price_is_rejected_before_the_store() {
    let (router, pool) = test_router().await;

    let (status, body) = post_json(
        &router,
        "/create_order",
        json!({
            "supplier_id": 1,
            "customer_id": 2,
            "quantity": 100,
            "price": "not-a-number",
            "order_date": "2025-01-15"
        }),
    )
    .await;

    assert!(status.is_client_error(), "got {status}");
    assert!(body["detail"].is_string());
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn missing_field_is_rejected_before_the_store() {
    let (router, pool) = test_router().await;

    let (status, _body) = post_json(
        &router,
        "/create_order",
        json!({
            "supplier_id": 1,
            "customer_id": 2,
            "quantity": 100,
            "price": 150.75
        }),
    )
    .await;

    assert!(status.is_client_error(), "got {status}");
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn malformed_query_params_are_a_client_error() {
    let (router, _pool) = test_router().await;

    let (status, _body) = get(&router, "/total_spent?start_date=garbage&end_date=2025-01-31").await;
    assert!(status.is_client_error(), "got {status}");

    let (status, _body) = get(&router, "/total_spent").await;
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn zero_sum_range_is_ok_not_absent() {
    let (router, pool) = test_router().await;
    OrderRepository::insert(
        pool.inner(),
        &seed_order(1, 0, 10.0, "2025-01-10 12:00:00"),
    )
    .await
    .unwrap();

    let (status, body) =
        get(&router, "/total_spent?start_date=2025-01-01&end_date=2025-01-31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_spent"], json!(0.0));
}

#[tokio::test]
async fn range_bounds_are_inclusive_over_http() {
    let (router, pool) = test_router().await;
    OrderRepository::insert(
        pool.inner(),
        &seed_order(1, 1, 100.0, "2025-01-01 00:00:00"),
    )
    .await
    .unwrap();
    OrderRepository::insert(
        pool.inner(),
        &seed_order(1, 1, 10.0, "2025-01-31 00:00:00"),
    )
    .await
    .unwrap();

    let (status, body) = get(
        &router,
        "/total_spent?start_date=2025-01-01T00:00:00&end_date=2025-01-31T00:00:00",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_spent"], json!(110.0));
}

#[tokio::test]
async fn top_products_never_exceeds_ten_groups() {
    let (router, pool) = test_router().await;
    for supplier in 1..=12 {
        OrderRepository::insert(
            pool.inner(),
            &seed_order(supplier, supplier * 10, 1.0, "2025-01-15 12:00:00"),
        )
        .await
        .unwrap();
    }

    let (status, body) =
        get(&router, "/top_products?start_date=2025-01-01&end_date=2025-01-31").await;
    assert_eq!(status, StatusCode::OK);

    let products = body["top_products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    assert_eq!(products[0]["product_id"], json!(12));
    assert_eq!(products[0]["total_sold"], json!(120));
}

#[tokio::test]
async fn top_suppliers_never_exceeds_five_groups() {
    let (router, pool) = test_router().await;
    for supplier in 1..=7 {
        OrderRepository::insert(
            pool.inner(),
            &seed_order(supplier, 1, 1.0, "2025-01-15 12:00:00"),
        )
        .await
        .unwrap();
    }

    let (status, body) =
        get(&router, "/top_suppliers?start_date=2025-01-01&end_date=2025-01-31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_suppliers"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn routes_can_be_nested_under_a_prefix() {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_secs: 5,
        busy_timeout_ms: 1000,
    };
    let pool = DatabasePool::new(&config).await.expect("in-memory pool");
    pool.migrate().await.expect("migrations");

    let api_config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_prefix: "/api".to_string(),
        cors_enabled: false,
    };
    let router = ApiServer::new(api_config, Arc::new(pool)).router();

    let (status, body) = get(&router, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Order reporting service"));

    let (status, _body) = get(&router, "/total_spent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
