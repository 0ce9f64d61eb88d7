mod delete_test;
mod get_test;
mod post_test;

use crate::helpers::send;
use axum::Router;
use serde_json::{Value, json};

/// Registers an attendee over HTTP and returns its id.
pub async fn register(app: &Router, name: &str, phone: &str, region: &str) -> i64 {
    let (_, json) = send(
        app,
        "POST",
        "/api/attendees",
        Some(json!({
            "name": name,
            "email": format!("{}@x.com", name.to_lowercase().replace(' ', ".")),
            "phone": phone,
            "region": region
        })),
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

pub fn ids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect()
}
