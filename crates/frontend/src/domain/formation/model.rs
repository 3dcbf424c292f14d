use contracts::domain::formation::{Formation, FormationDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

/// Published formations, optionally restricted to one category slug.
pub async fn fetch_public(category_slug: Option<&str>) -> Result<Vec<Formation>, String> {
    let url = match category_slug {
        Some(slug) => api_url(&format!("/api/formations?category={}", slug)),
        None => api_url("/api/formations"),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<Formation>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Admin list: every formation, published or not.
pub async fn fetch_all(access_token: &str) -> Result<Vec<Formation>, String> {
    let response = Request::get(&api_url("/api/admin/formations"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<Formation>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Upsert: a DTO with an id updates that row, without inserts.
pub async fn save(dto: &FormationDto, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/admin/formations"))
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

pub async fn delete(id: i64, access_token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/admin/formations/{}", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

pub async fn toggle_publish(id: i64, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/admin/formations/{}/publish", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}
