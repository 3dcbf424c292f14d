use contracts::domain::formateur::{Formateur, FormateurDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

/// Published trainers, newest first.
pub async fn fetch_public() -> Result<Vec<Formateur>, String> {
    let response = Request::get(&api_url("/api/formateurs"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<Formateur>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Admin list: every trainer, published or not.
pub async fn fetch_all(access_token: &str) -> Result<Vec<Formateur>, String> {
    let response = Request::get(&api_url("/api/admin/formateurs"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<Formateur>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn save(dto: &FormateurDto, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/admin/formateurs"))
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
    let response = Request::delete(&api_url(&format!("/api/admin/formateurs/{}", id)))
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
    let response = Request::post(&api_url(&format!("/api/admin/formateurs/{}/publish", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}
