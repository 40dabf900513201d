//! 产品存储
//!
//! [`ProductStore`] 是处理器唯一依赖的存储能力。生产环境使用
//! [`PgProductStore`]，测试中注入 [`MemoryProductStore`]。

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::info;

use super::model::{NewProduct, Product};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 确保产品表存在，可重复执行
    async fn init_schema(&self) -> StoreResult<()>;

    async fn create(&self, product: &NewProduct) -> StoreResult<Product>;

    /// 按 id 升序返回全部产品
    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn get(&self, id: i64) -> StoreResult<Option<Product>>;

    /// 返回受影响的行数
    async fn update(&self, id: i64, product: &NewProduct) -> StoreResult<u64>;

    /// 返回受影响的行数
    async fn delete(&self, id: i64) -> StoreResult<u64>;

    async fn ping(&self) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn init_schema(&self) -> StoreResult<()> {
        info!("Creating products table if missing...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                price NUMERIC(10, 2) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let created = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2::NUMERIC) \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> StoreResult<u64> {
        let result =
            sqlx::query("UPDATE products SET name = $1, price = $2::NUMERIC WHERE id = $3")
                .bind(&product.name)
                .bind(product.price)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// 内存存储，id 单调递增且不复用
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<MemoryTable>,
}

#[derive(Default)]
struct MemoryTable {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn init_schema(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let mut table = self.inner.write().await;
        table.last_id += 1;
        let created = product.clone().into_product(table.last_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, product: &NewProduct) -> StoreResult<u64> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = product.name.clone();
                row.price = product.price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
