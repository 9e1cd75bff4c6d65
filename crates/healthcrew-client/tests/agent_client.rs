//! General service client integration tests against a stub server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use healthcrew_client::{
    AgentClient, FoodRecognitionRequest, Goal, HealthGoalRequest, JsonObject, MealPlanRequest,
    NutritionRequest, RecommendationRequest,
};

fn client_for(server: &MockServer) -> AgentClient {
    AgentClient::builder().base_url(server.uri()).build().unwrap()
}

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let health = client_for(&server).health_check().await.unwrap();
    assert_eq!(health["status"], json!("ok"));
}

#[tokio::test]
async fn test_recognize_food() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/food/recognize"))
        .and(body_json(json!({"image_path": "test_food.jpg"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foodName": "Kung Pao chicken",
            "calories": 280,
            "protein": 18.0,
            "carbohydrate": 12.0,
            "fat": 18.0,
            "confidence": 0.92
        })))
        .mount(&server)
        .await;

    let food = client_for(&server)
        .recognize_food(&FoodRecognitionRequest {
            image_path: Some("test_food.jpg".to_string()),
            food_name: None,
        })
        .await
        .unwrap();

    assert_eq!(food.food_name, "Kung Pao chicken");
    assert_eq!(food.calories, 280.0);
    assert_eq!(food.confidence, 0.92);
}

#[tokio::test]
async fn test_chat() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "user_id": 1,
            "session_id": "go-sdk-demo-001",
            "message": "How do I lose weight?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Eat fewer calories than you burn.",
            "session_id": "go-sdk-demo-001",
            "intent": "weight_loss"
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .ask(1, "go-sdk-demo-001", "How do I lose weight?")
        .await
        .unwrap();

    assert_eq!(reply.response, "Eat fewer calories than you burn.");
    assert_eq!(reply.session_id.as_deref(), Some("go-sdk-demo-001"));
    assert_eq!(reply.extra["intent"], json!("weight_loss"));
}

#[tokio::test]
async fn test_open_schema_operations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/nutrition/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nutrition_analysis": {"nutrient_density": "high", "health_rating": 4},
            "recommendations": ["add vegetables"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/health-goal/analyze"))
        .and(body_json(json!({
            "goal_type": "weight_loss",
            "current_data": {"value": 75.0},
            "historical_data": [{"value": 80.0, "date": "2024-11-01"}],
            "target": {"value": 70.0, "deadline": "2025-02-01"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "progress_analysis": {"completion_rate": 50.0, "trend": "improving"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/meal-plan"))
        .and(body_json(json!({"target_calories": 1800, "goal": "weight_loss", "days": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meal_plan": [{"day": 1, "date": "2024-12-01"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/recommendations"))
        .and(body_json(json!({"user_id": 1, "recommendation_type": "posts"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [{"title": "Salad ideas", "source": "community"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let nutrition = client
        .analyze_nutrition(&NutritionRequest {
            food_data: object(json!({"foodName": "Kung Pao chicken", "calories": 280})),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(nutrition["nutrition_analysis"]["health_rating"], json!(4));

    let goal = client
        .analyze_health_goal(&HealthGoalRequest {
            goal_type: Goal::WeightLoss,
            current_data: object(json!({"value": 75.0})),
            historical_data: vec![object(json!({"value": 80.0, "date": "2024-11-01"}))],
            target: object(json!({"value": 70.0, "deadline": "2025-02-01"})),
        })
        .await
        .unwrap();
    assert_eq!(goal["progress_analysis"]["trend"], json!("improving"));

    let plan = client
        .generate_meal_plan(&MealPlanRequest::new(Goal::WeightLoss, 1800, 3))
        .await
        .unwrap();
    assert_eq!(plan["meal_plan"][0]["day"], json!(1));

    let recs = client
        .recommendations(&RecommendationRequest::new(1, "posts"))
        .await
        .unwrap();
    assert_eq!(recs["recommendations"][0]["title"], json!("Salad ideas"));
}

#[tokio::test]
async fn test_set_timeout_applies_to_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert!(client.health_check().await.is_ok());

    client.set_timeout(Duration::from_millis(50));
    let err = client.health_check().await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_very_long_timeout_is_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = AgentClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(365 * 24 * 60 * 60))
        .build()
        .unwrap();

    let health = client.health_check().await.unwrap();
    assert_eq!(health["status"], json!("ok"));
}

#[tokio::test]
async fn test_wrong_shape_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/food/recognize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recognize_food(&FoodRecognitionRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().contains(r#"{"unexpected":true}"#));
}
