use async_trait::async_trait;
use common::{
    AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest, CreateTransactionRequest,
    TransactionDto,
};

use crate::error::Result;

/// The backend surface the dashboard talks to.
///
/// Futures are not required to be `Send`: in the browser every request runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// `GET /transactions`, in backend order.
    async fn list_transactions(&self) -> Result<Vec<TransactionDto>>;

    /// `POST /transactions`, returning the stored record with its id.
    async fn create_transaction(&self, request: CreateTransactionRequest) -> Result<TransactionDto>;

    /// `POST /categorize`
    async fn categorize(&self, request: CategorizeRequest) -> Result<CategorizationResult>;

    /// `POST /advice`
    async fn advice(&self, request: AdviceRequest) -> Result<AdviceResult>;
}
