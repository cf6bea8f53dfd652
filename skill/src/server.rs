use std::sync::Arc;

use axum::{
    Json,
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tracing::{debug, warn};

use bank_holidays::utils::now_datetime;

use crate::{
    controller::SkillController,
    envelope::{
        SkillRequest,
        SkillResponse,
    },
};

#[derive(Clone)]
pub struct SkillState{
    controller: Arc<SkillController>,
    application_id: Option<Arc<str>>,
}

impl SkillState{
    #[must_use] pub fn new(controller: SkillController, application_id: Option<String>) -> Self{
        Self{
            controller: Arc::new(controller),
            application_id: application_id.map(Arc::from),
        }
    }

    /// Pure
    fn accepts(&self, request: &SkillRequest) -> bool{
        match &self.application_id{
            Some(expected) => request.application_id() == Some(&**expected),
            None           => true,
        }
    }
}

pub fn router(state: SkillState) -> Router{
    Router::new()
        .route("/", post(handle_skill_request))
        .route("/health", get(|| async{ StatusCode::OK }))
        .with_state(state)
}

async fn handle_skill_request(
    State(state): State<SkillState>,
    Json(request): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, StatusCode>{
    if !state.accepts(&request){
        warn!(application_id = ?request.application_id(), "rejected request for another application");
        return Err(StatusCode::BAD_REQUEST);
    }

    let answer = state.controller.handle(&request, now_datetime()).await;
    debug!(ends_session = answer.ends_session(), "answered skill request");

    Ok(Json(answer))
}

#[cfg(test)]
mod tests{
    use super::*;

    use std::time::Duration;

    use axum::{
        body::Body,
        http::Request,
    };
    use bank_holidays::HolidayClient;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::controller::{GOODBYE_MESSAGE, HELP_MESSAGE};

    fn app(application_id: Option<&str>) -> Router{
        // Never contacted: none of these requests reach the holiday lookup
        let client = HolidayClient::new("http://127.0.0.1:9/bank-holidays.json", Duration::from_secs(1)).unwrap();
        router(SkillState::new(SkillController::new(client), application_id.map(str::to_string)))
    }

    fn post_json(body: &Value) -> Request<Body>{
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn stop_request(application_id: &str) -> Value{
        json!({
            "session": {"application": {"applicationId": application_id}},
            "request": {"type": "IntentRequest", "intent": {"name": "AMAZON.StopIntent"}},
        })
    }

    async fn body_json(response: axum::response::Response) -> Value{
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health(){
        let response = app(None)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_skill_request_round_trip(){
        let response = app(None).oneshot(post_json(&stop_request("anything"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"]["outputSpeech"]["ssml"], format!("<speak>{GOODBYE_MESSAGE}</speak>"));
        assert_eq!(body["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn test_application_id_is_checked(){
        let ours = app(Some("amzn1.ask.skill.ours"));

        let rejected = ours.clone().oneshot(post_json(&stop_request("amzn1.ask.skill.theirs"))).await.unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

        let accepted = ours.oneshot(post_json(&stop_request("amzn1.ask.skill.ours"))).await.unwrap();
        assert_eq!(accepted.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_help_keeps_session_open(){
        let request = json!({"request": {"type": "IntentRequest", "intent": {"name": "AMAZON.HelpIntent"}}});
        let body = body_json(app(None).oneshot(post_json(&request)).await.unwrap()).await;

        assert_eq!(body["response"]["shouldEndSession"], false);
        assert_eq!(body["response"]["reprompt"]["outputSpeech"]["ssml"], format!("<speak>{HELP_MESSAGE}</speak>"));
    }
}
