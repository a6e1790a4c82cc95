use chrono::NaiveDateTime;

/// A purchase order as supplied by a caller, before the store assigns an id.
///
/// `supplier_id` and `customer_id` are opaque integers; no registry backs
/// them. Quantity and price carry no sign constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub supplier_id: i64,
    pub customer_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub order_date: NaiveDateTime,
}
