use serde::{Deserialize, Serialize};

pub const INVALID_QUESTION_MESSAGE: &str = "Vui lòng nhập câu hỏi.";
pub const UPSTREAM_BUSY_MESSAGE: &str =
    "Hệ thống đang bận, vui lòng thử lại sau. (Lỗi kết nối RAG Core)";

/// Body accepted on `POST /api/search`.
///
/// `question` stays optional so that `{}` and `{"question": null}` decode
/// and can be rejected with the localized message instead of a codec error.
#[derive(Debug, Default, Deserialize)]
pub struct UserQueryRequest {
    #[serde(rename = "question", default)]
    pub query: Option<String>,
}

impl UserQueryRequest {
    /// The question if it has any non-whitespace content.
    pub fn question(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

/// Body sent to the RAG service.
#[derive(Debug, Serialize)]
pub struct UpstreamRequest<'a> {
    pub question: &'a str,
}

/// Answer from the RAG service, passed to the caller as received.
///
/// Entries of `sources` may be `null` when a retrieved hit has no name;
/// they are kept so the list reaches the frontend unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<String>,
}

impl RagResponse {
    /// A response carrying only a message in `answer`.
    pub fn message(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: None,
            time_taken: None,
        }
    }

    pub fn invalid_question() -> Self {
        Self::message(INVALID_QUESTION_MESSAGE)
    }

    pub fn upstream_busy() -> Self {
        Self::message(UPSTREAM_BUSY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_questions_are_treated_as_missing() {
        for body in [
            json!({}),
            json!({"question": null}),
            json!({"question": ""}),
            json!({"question": " \t\n"}),
        ] {
            let request: UserQueryRequest = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(request.question(), None, "body: {}", body);
        }
    }

    #[test]
    fn question_is_kept_untrimmed() {
        let request: UserQueryRequest =
            serde_json::from_value(json!({"question": "  rắn hổ mang? "})).unwrap();
        assert_eq!(request.question(), Some("  rắn hổ mang? "));
    }

    #[test]
    fn error_response_omits_empty_fields() {
        let body = serde_json::to_value(RagResponse::invalid_question()).unwrap();
        assert_eq!(body, json!({"answer": "Vui lòng nhập câu hỏi."}));
    }

    #[test]
    fn upstream_body_tolerates_missing_optional_fields() {
        let response: RagResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(response, RagResponse::message("42"));

        let response: RagResponse =
            serde_json::from_str(r#"{"answer":"42","sources":[],"time_taken":"0.10s"}"#).unwrap();
        assert_eq!(response.sources, Some(vec![]));
        assert_eq!(response.time_taken.as_deref(), Some("0.10s"));
    }

    #[test]
    fn null_source_entries_are_kept_in_place() {
        let raw = json!({
            "answer": "Rắn hổ mang chúa rất nguy hiểm.",
            "sources": ["Ophiophagus hannah", null],
            "time_taken": "1.20s"
        });
        let response: RagResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            response.sources,
            Some(vec![Some("Ophiophagus hannah".to_string()), None])
        );
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn upstream_request_uses_question_key() {
        let body = serde_json::to_value(UpstreamRequest { question: "life?" }).unwrap();
        assert_eq!(body, json!({"question": "life?"}));
    }
}
