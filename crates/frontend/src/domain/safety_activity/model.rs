use contracts::domain::safety_activity::{SafetyActivity, SafetyActivityDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

/// All Safety Days activities, newest first. Activities have no publish
/// flag, so the public page and the admin list share this call.
pub async fn fetch_all() -> Result<Vec<SafetyActivity>, String> {
    let response = Request::get(&api_url("/api/safety-activities"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<SafetyActivity>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn save(dto: &SafetyActivityDto, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/admin/safety-activities"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

pub async fn delete(id: &str, access_token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/admin/safety-activities/{}", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}
