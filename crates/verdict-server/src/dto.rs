use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_request_deserializes() {
        let req: EvaluateRequest = serde_json::from_str(
            r#"{"name": "EcoTrack", "description": "A farm sensor platform using IoT and ML"}"#,
        )
        .unwrap();

        assert_eq!(req.name, "EcoTrack");
        assert!(req.description.contains("IoT"));
    }

    #[test]
    fn test_evaluate_request_rejects_missing_fields() {
        assert!(serde_json::from_str::<EvaluateRequest>(r#"{"name": "EcoTrack"}"#).is_err());
    }

    #[test]
    fn test_evaluate_response_serializes_result_field() {
        let json = serde_json::to_value(EvaluateResponse { result: "done".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "done" }));
    }
}
