pub mod assistant;
pub mod transaction;

use async_trait::async_trait;
use common::{
    AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest, CreateTransactionRequest,
    TransactionDto,
};
use compute::{ApiError, DashboardApi, Result};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::settings;

fn endpoint_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Turns a non-OK response into `ApiError::Status`, keeping the raw body.
async fn status_error(endpoint: &str, method: &str, response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    log::debug!("{} {} - Non-OK response: {} {}", method, endpoint, status, status_text);
    ApiError::Status {
        status,
        status_text,
        body,
    }
}

async fn parse<T>(endpoint: &str, method: &str, response: Response) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::debug!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let url = endpoint_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log::debug!("GET {} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        return Err(status_error(endpoint, "GET", response).await);
    }

    parse(endpoint, "GET", response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = endpoint_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let err = ApiError::Encode(e.to_string());
            log::debug!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::debug!("POST {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        return Err(status_error(endpoint, "POST", response).await);
    }

    parse(endpoint, "POST", response).await
}

/// The dashboard's view of the backend, over `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpApi;

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn list_transactions(&self) -> Result<Vec<TransactionDto>> {
        transaction::get_transactions().await
    }

    async fn create_transaction(&self, request: CreateTransactionRequest) -> Result<TransactionDto> {
        transaction::create_transaction(request).await
    }

    async fn categorize(&self, request: CategorizeRequest) -> Result<CategorizationResult> {
        assistant::categorize(request).await
    }

    async fn advice(&self, request: AdviceRequest) -> Result<AdviceResult> {
        assistant::get_advice(request).await
    }
}
