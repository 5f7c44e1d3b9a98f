mod shared;

use serde_json::Value;

use crate::shared::TestClient;

#[tokio::test]
async fn health_returns_healthy() {
    let client = TestClient::new();

    client
        .send(request!(GET "/health";))
        .await
        .status(200)
        .is_json()
        .json_body(|body: Value| {
            let body = body.as_object().unwrap();
            assert_eq!(body.len(), 3);
            assert_eq!(body["status"], "healthy");
            assert!(body["uptime_seconds"].is_u64());
            assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        })
        .await;
}

#[tokio::test]
async fn uptime_never_decreases() {
    let client = TestClient::new();

    let first = client
        .send(request!(GET "/health";))
        .await
        .status(200)
        .into_deserialized_json_body::<Value>()
        .await["uptime_seconds"]
        .as_u64()
        .unwrap();

    let second = client
        .send(request!(GET "/";))
        .await
        .status(200)
        .into_deserialized_json_body::<Value>()
        .await["runtime"]["uptime_seconds"]
        .as_u64()
        .unwrap();

    let third = client
        .send(request!(GET "/health";))
        .await
        .status(200)
        .into_deserialized_json_body::<Value>()
        .await["uptime_seconds"]
        .as_u64()
        .unwrap();

    assert!(first <= second, "{first} > {second}");
    assert!(second <= third, "{second} > {third}");
}
