use axum::Json;
use serde::{Deserialize, Serialize};

/// 通用的API响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 错误码，0表示成功，非0表示失败
    pub code: i32,
    /// 错误消息，成功时为"success"
    pub msg: String,
    /// 响应数据，错误时为None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_data: Option<T>,
}

/// 空响应类型（用于无响应数据的API）
#[derive(Debug, Serialize, Deserialize)]
pub struct EmptyResponse {}

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code: 0,
        msg: "success".into(),
        resp_data: Some(data),
    })
}

pub fn error_to_api_response<T>(code: i32, msg: String) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code,
        msg,
        resp_data: None,
    })
}

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const USER_EXISTS: i32 = 1001;
    pub const NOT_FOUND: i32 = 1004;
    pub const INTERNAL_ERROR: i32 = 5000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_carries_data() {
        let resp = success_to_api_response(serde_json::json!({"username": "alice"}));
        let json = serde_json::to_value(&resp.0).unwrap();

        assert_eq!(json["code"], error_codes::SUCCESS);
        assert_eq!(json["msg"], "success");
        assert_eq!(json["resp_data"]["username"], "alice");
    }

    #[test]
    fn error_response_omits_resp_data() {
        let resp: Json<ApiResponse<EmptyResponse>> =
            error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string());
        let json = serde_json::to_value(&resp.0).unwrap();

        assert_eq!(json["code"], error_codes::NOT_FOUND);
        assert!(json.get("resp_data").is_none());
    }
}
