use serde::Serialize;
use sqlx::FromRow;

/// One group of the summed-quantity aggregate, keyed by supplier
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SupplierSales {
    pub supplier_id: i64,
    pub total_sold: i64,
}

/// One group of the order-count aggregate, keyed by supplier
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SupplierOrders {
    pub supplier_id: i64,
    pub total_orders: i64,
}
