use async_trait::async_trait;
use chrono::NaiveDate;
use common::{
    AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest, CreateTransactionRequest,
    TransactionDto,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::api::DashboardApi;
use crate::error::{ApiError, Result};

/// Routes dashboard logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Collects the level of every event emitted while `f` runs.
pub fn levels_during<R>(f: impl FnOnce() -> R) -> (R, Vec<Level>) {
    let levels = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(LevelRecorder(levels.clone()));
    let result = tracing::subscriber::with_default(subscriber, f);
    let levels = levels.lock().unwrap().clone();
    (result, levels)
}

struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// A request seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    ListTransactions,
    CreateTransaction(CreateTransactionRequest),
    Categorize(CategorizeRequest),
    Advice(AdviceRequest),
}

/// In-memory backend with scripted responses.
///
/// Each endpoint answers from its own queue. An empty queue answers with a
/// network error. A gate, when set, holds the next categorization until the
/// paired sender fires.
#[derive(Default)]
pub struct FakeApi {
    transactions: RefCell<VecDeque<Result<Vec<TransactionDto>>>>,
    created: RefCell<VecDeque<Result<TransactionDto>>>,
    categorizations: RefCell<VecDeque<Result<CategorizationResult>>>,
    advice: RefCell<VecDeque<Result<AdviceResult>>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    recorded: RefCell<Vec<Recorded>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(self, response: Result<Vec<TransactionDto>>) -> Self {
        self.transactions.borrow_mut().push_back(response);
        self
    }

    pub fn with_created(self, response: Result<TransactionDto>) -> Self {
        self.created.borrow_mut().push_back(response);
        self
    }

    pub fn with_categorization(self, response: Result<CategorizationResult>) -> Self {
        self.categorizations.borrow_mut().push_back(response);
        self
    }

    pub fn with_advice(self, response: Result<AdviceResult>) -> Self {
        self.advice.borrow_mut().push_back(response);
        self
    }

    pub fn with_gate(self, gate: oneshot::Receiver<()>) -> Self {
        *self.gate.borrow_mut() = Some(gate);
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.borrow().clone()
    }

    fn record(&self, request: Recorded) {
        self.recorded.borrow_mut().push(request);
    }
}

fn next<T>(queue: &RefCell<VecDeque<Result<T>>>) -> Result<T> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn list_transactions(&self) -> Result<Vec<TransactionDto>> {
        self.record(Recorded::ListTransactions);
        next(&self.transactions)
    }

    async fn create_transaction(&self, request: CreateTransactionRequest) -> Result<TransactionDto> {
        self.record(Recorded::CreateTransaction(request));
        next(&self.created)
    }

    async fn categorize(&self, request: CategorizeRequest) -> Result<CategorizationResult> {
        self.record(Recorded::Categorize(request));
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.await.expect("gate sender dropped");
        }
        next(&self.categorizations)
    }

    async fn advice(&self, request: AdviceRequest) -> Result<AdviceResult> {
        self.record(Recorded::Advice(request));
        next(&self.advice)
    }
}
