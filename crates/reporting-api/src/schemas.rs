use chrono::NaiveDateTime;
use reporting_core::datetime;
use reporting_core::types::NewOrder;
use reporting_db::models::{SupplierOrders, SupplierSales};
use serde::{Deserialize, Serialize};

/// Inclusive date range accepted by every read endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeParams {
    #[serde(deserialize_with = "datetime::deserialize")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub end_date: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub supplier_id: i64,
    pub customer_id: i64,
    pub quantity: i64,
    pub price: f64,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub order_date: NaiveDateTime,
}

impl CreateOrderRequest {
    pub fn into_order(self) -> NewOrder {
        NewOrder {
            supplier_id: self.supplier_id,
            customer_id: self.customer_id,
            quantity: self.quantity,
            price: self.price,
            order_date: self.order_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalSpentResponse {
    pub total_spent: f64,
}

/// Wire field is `product_id` for client compatibility; the value is a
/// supplier id — there is no product entity in this model.
#[derive(Debug, Serialize)]
pub struct TopProductEntry {
    pub product_id: i64,
    pub total_sold: i64,
}

impl From<SupplierSales> for TopProductEntry {
    fn from(row: SupplierSales) -> Self {
        Self {
            product_id: row.supplier_id,
            total_sold: row.total_sold,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopProductsResponse {
    pub top_products: Vec<TopProductEntry>,
}

#[derive(Debug, Serialize)]
pub struct TopSupplierEntry {
    pub supplier_id: i64,
    pub total_orders: i64,
}

impl From<SupplierOrders> for TopSupplierEntry {
    fn from(row: SupplierOrders) -> Self {
        Self {
            supplier_id: row.supplier_id,
            total_orders: row.total_orders,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopSuppliersResponse {
    pub top_suppliers: Vec<TopSupplierEntry>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub message: &'static str,
    pub order_id: i64,
}

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}
