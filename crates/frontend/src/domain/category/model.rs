use contracts::domain::category::Category;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

/// All categories, ordered by `order_index`. Backs the tab rows on the
/// public pages and the category select in the formations admin form.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
