//! HTTP call for `POST /query`.

use crate::shared::api_utils::api_url;
use contracts::query::{QueryRequest, QueryResponse};
use gloo_net::http::Request;

pub async fn post_query(question: &str) -> Result<QueryResponse, String> {
    let body = QueryRequest::new(question);

    let response = Request::post(&api_url("/query"))
        .json(&body)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Query failed: {}", response.status_text()));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}
