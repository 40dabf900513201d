//! 产品处理器

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::{
    model::{NewProduct, Product},
    store::ProductStore,
};
use crate::core::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// 路径中的产品 id，非十进制整数时以 400 拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        raw.parse().map(ProductId).map_err(|_| ApiError::InvalidId)
    }
}

/// 只解码第一个 JSON 值，其后的内容忽略；`null` 视为全部字段取零值
fn decode_body(body: &[u8]) -> Result<NewProduct, ApiError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let payload = Option::<NewProduct>::deserialize(&mut de)?;
    Ok(payload.unwrap_or_default())
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = decode_body(&body)?;
    let product = state.store.create(&payload).await?;

    info!("Created product: {} ({})", product.name, product.id);

    Ok(StatusCode::CREATED)
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = decode_body(&body)?;

    if state.store.update(id, &payload).await? == 0 {
        return Err(ApiError::NotFound);
    }

    info!("Updated product: {}", id);

    Ok(StatusCode::OK)
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    info!("Deleted product: {}", id);

    Ok(StatusCode::OK)
}

pub async fn collection_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// id 先于方法校验：非法 id 返回 400，合法 id 返回 405
pub async fn item_method_not_allowed(_id: ProductId) -> ApiError {
    ApiError::MethodNotAllowed
}

/// `/products/` 视为空 id
pub async fn empty_id() -> ApiError {
    ApiError::InvalidId
}
