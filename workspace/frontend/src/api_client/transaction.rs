use common::{CreateTransactionRequest, TransactionDto};
use compute::Result;

use crate::api_client;

/// Get all transactions
pub async fn get_transactions() -> Result<Vec<TransactionDto>> {
    log::trace!("Fetching all transactions");
    let result = api_client::get::<Vec<TransactionDto>>("/transactions").await;
    match &result {
        Ok(transactions) => log::info!("Fetched {} transactions", transactions.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Create a new transaction
pub async fn create_transaction(request: CreateTransactionRequest) -> Result<TransactionDto> {
    log::debug!("Creating new transaction: {}", request.description);
    let result = api_client::post::<TransactionDto, _>("/transactions", &request).await;
    match &result {
        Ok(transaction) => log::info!(
            "Successfully created transaction: {} (ID: {})",
            transaction.description,
            transaction.id
        ),
        Err(e) => log::error!("Failed to create transaction '{}': {}", request.description, e),
    }
    result
}
