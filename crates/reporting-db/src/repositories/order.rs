use crate::models::{SupplierOrders, SupplierSales};
use crate::Result;
use chrono::NaiveDateTime;
use reporting_core::types::NewOrder;
use sqlx::SqlitePool;

pub struct OrderRepository;

impl OrderRepository {
    /// Insert a single order and return its assigned id.
    ///
    /// Generic over the executor so callers can run it on the pool or inside
    /// their own transaction.
    pub async fn insert<'e, E>(executor: E, order: &NewOrder) -> Result<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let order_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO orders (supplier_id, customer_id, quantity, price, order_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING order_id
            "#,
        )
        .bind(order.supplier_id)
        .bind(order.customer_id)
        .bind(order.quantity)
        .bind(order.price)
        .bind(order.order_date)
        .fetch_one(executor)
        .await?;
        Ok(order_id)
    }

    /// Sum of `quantity * price` over the inclusive date range.
    ///
    /// `None` means no orders matched; a range of orders summing to zero
    /// still returns `Some(0.0)`.
    pub async fn total_spent(
        pool: &SqlitePool,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<Option<f64>> {
        let total = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT SUM(quantity * price) FROM orders WHERE order_date BETWEEN $1 AND $2",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Top 10 suppliers by summed quantity in the inclusive date range.
    ///
    /// Ties break on ascending supplier id so repeated queries return a
    /// stable order.
    pub async fn top_products(
        pool: &SqlitePool,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<Vec<SupplierSales>> {
        let results = sqlx::query_as::<_, SupplierSales>(
            r#"
            SELECT supplier_id, SUM(quantity) AS total_sold
            FROM orders
            WHERE order_date BETWEEN $1 AND $2
            GROUP BY supplier_id
            ORDER BY total_sold DESC, supplier_id ASC
            LIMIT 10
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(pool)
        .await?;
        Ok(results)
    }

    /// Top 5 suppliers by order count in the inclusive date range, same
    /// tie-break as [`top_products`](Self::top_products).
    pub async fn top_suppliers(
        pool: &SqlitePool,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<Vec<SupplierOrders>> {
        let results = sqlx::query_as::<_, SupplierOrders>(
            r#"
            SELECT supplier_id, COUNT(order_id) AS total_orders
            FROM orders
            WHERE order_date BETWEEN $1 AND $2
            GROUP BY supplier_id
            ORDER BY total_orders DESC, supplier_id ASC
            LIMIT 5
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(pool)
        .await?;
        Ok(results)
    }
}
