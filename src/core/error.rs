//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app::product::store::StoreError;

/// 请求处理错误，每个变体对应唯一的 HTTP 状态码
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid ID")]
    InvalidId,
    /// 请求体 JSON 解析失败，携带原始解析错误
    #[error("{0}")]
    InvalidJson(String),
    #[error("Product not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// 存储层错误，携带原始错误信息
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidJson("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Storage("connection refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::InvalidId.to_string(), "Invalid ID");
        assert_eq!(ApiError::NotFound.to_string(), "Product not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(
            ApiError::Storage("pool timed out".into()).to_string(),
            "pool timed out"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{\"name\":").unwrap_err();
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::InvalidJson(ref msg) if msg.contains("EOF")));
    }

    #[test]
    fn test_store_error_conversion() {
        let api_err = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
