use common::{AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest};
use compute::Result;

use crate::api_client;

/// Ask the backend to categorize one description
pub async fn categorize(request: CategorizeRequest) -> Result<CategorizationResult> {
    log::debug!("Categorizing: {}", request.description);
    let result = api_client::post::<CategorizationResult, _>("/categorize", &request).await;
    match &result {
        Ok(verdict) => log::info!(
            "Categorized as {} (confidence: {:?})",
            verdict.category,
            verdict.confidence
        ),
        Err(e) => log::error!("Failed to categorize '{}': {}", request.description, e),
    }
    result
}

/// Ask the backend for advice on the stored transactions
pub async fn get_advice(request: AdviceRequest) -> Result<AdviceResult> {
    log::debug!("Requesting advice");
    let result = api_client::post::<AdviceResult, _>("/advice", &request).await;
    if let Err(e) = &result {
        log::error!("Failed to get advice: {}", e);
    }
    result
}
