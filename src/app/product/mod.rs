//! 产品资源

pub mod handler;
pub mod model;
pub mod store;

use axum::{
    routing::{any, get},
    Router,
};

use handler::{
    collection_method_not_allowed, create_product, delete_product, empty_id, get_product,
    item_method_not_allowed, list_products, update_product, AppState,
};

/// 产品路由
///
/// GET 路由显式注册 HEAD，避免被自动当作 GET 处理。
/// `/products/` 之后的整段路径都作为 id 解析，多段路径同样返回 400。
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .head(collection_method_not_allowed)
                .fallback(collection_method_not_allowed),
        )
        .route("/products/", any(empty_id))
        .route(
            "/products/*id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .head(item_method_not_allowed)
                .fallback(item_method_not_allowed),
        )
}
