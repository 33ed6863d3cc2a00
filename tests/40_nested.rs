mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

/// The nested routes share the parent-id policy with the reptile routes.
#[tokio::test]
async fn nested_routes_reject_malformed_parent_ids() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let auth = format!("Bearer {}", common::token_for(1));

    let routes = [
        "/reptiles/abc/feedings",
        "/reptiles/0/feedings",
        "/reptiles/abc/husbandry-records",
        "/reptiles/abc/schedules",
    ];

    for route in routes {
        let res = client
            .get(format!("{}{}", server.base_url, route))
            .header("Authorization", &auth)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "GET {}", route);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "Invalid Reptile Id", "GET {} body: {}", route, body);
    }

    Ok(())
}

#[tokio::test]
async fn create_feeding_rejects_malformed_parent_id() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/reptiles/abc/feedings", server.base_url))
        .header("Authorization", format!("Bearer {}", common::token_for(1)))
        .json(&json!({ "foodItem": "mouse" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid Reptile Id");
    Ok(())
}

#[tokio::test]
async fn create_schedule_rejects_malformed_parent_id() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/reptiles/0/schedules", server.base_url))
        .header("Authorization", format!("Bearer {}", common::token_for(1)))
        .json(&json!({
            "type": "feed",
            "description": "weekly feeding",
            "monday": true,
            "tuesday": false,
            "wednesday": false,
            "thursday": false,
            "friday": false,
            "saturday": false,
            "sunday": false
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid Reptile Id");
    Ok(())
}
