//! Sort Handlers
//!
//! 端点契约：
//! - 请求体 `{ "numbers": <array> }`
//! - `numbers` 缺失或不是数组 → 400，不调用排序
//! - 合法输入 → 序列原样传给排序命令，结果以裸 JSON 数组返回

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::application::SortNumbersCommand;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `numbers` 字段缺失或不是数组时返回的错误信息
const INVALID_INPUT: &str = "Invalid input, expected an array of numbers";

#[derive(Debug, Deserialize)]
pub struct SortNumbersRequest {
    /// 候选数字序列，以原始 JSON 值接收以便做形状校验
    #[serde(default)]
    pub numbers: Option<Value>,
}

pub async fn sort_numbers(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SortNumbersRequest>,
) -> Result<Json<Vec<Value>>, ApiError> {
    // 只校验顶层形状，元素级数值校验由客户端负责
    let numbers = match req.numbers {
        Some(Value::Array(numbers)) => numbers,
        _ => return Err(ApiError::BadRequest(INVALID_INPUT.to_string())),
    };

    let result = state.sort_handler.handle(SortNumbersCommand { numbers });

    Ok(Json(result.sorted))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{create_routes, AppState};

    fn test_app() -> Router {
        create_routes().with_state(Arc::new(AppState::new()))
    }

    fn sort_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/sort-numbers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_sort_numbers_ok() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": [5, 3, 8, 1]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([1, 3, 5, 8]));
    }

    #[tokio::test]
    async fn test_sort_numbers_duplicates_and_negatives() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": [2, 2, -1, 0]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([-1, 0, 2, 2]));
    }

    #[tokio::test]
    async fn test_sort_numbers_empty_array() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": []}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_sort_numbers_floats() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": [1.5, -2.25, 0]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([-2.25, 0, 1.5]));
    }

    #[tokio::test]
    async fn test_missing_numbers_field_is_rejected() {
        let response = test_app().oneshot(sort_request(r#"{}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Invalid input, expected an array of numbers" })
        );
    }

    #[tokio::test]
    async fn test_numbers_as_string_is_rejected() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": "5,3,8,1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Invalid input, expected an array of numbers" })
        );
    }

    #[tokio::test]
    async fn test_numbers_as_number_is_rejected() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": 5}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Invalid input, expected an array of numbers" })
        );
    }

    #[tokio::test]
    async fn test_numbers_null_is_rejected() {
        let response = test_app()
            .oneshot(sort_request(r#"{"numbers": null}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Invalid input, expected an array of numbers" })
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let request = Request::builder()
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
