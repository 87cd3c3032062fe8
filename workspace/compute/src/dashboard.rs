//! Dashboard view-model.
//!
//! All state lives in [`Dashboard`]. UI events and network completions are
//! fed in as [`Action`]s through [`Dashboard::apply`], which mutates the state
//! synchronously and may hand back one [`Command`] describing a request to
//! issue. [`execute`] performs a command against a [`DashboardApi`] and turns
//! the outcome into the completion action.

pub mod chat;
pub mod draft;
pub mod fetch_state;

#[cfg(test)]
mod testing;

pub use chat::{ChatMessage, ChatMode, ChatRequest, ChatStatus, Conversation, Role};
pub use draft::{DraftField, TransactionDraft};
pub use fetch_state::FetchState;

use chrono::{Local, NaiveDate};
use common::{
    AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest, CreateTransactionRequest,
    TransactionDto,
};
use std::cell::RefCell;
use tracing::{debug, info, instrument, warn};

use crate::api::DashboardApi;
use crate::categories::{category_breakdown, CategorySlice};
use crate::error::{ApiError, Result};

/// State of the "Add Transaction" submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Everything that can happen to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadRequested,
    Loaded(Result<Vec<TransactionDto>>),

    ModalOpened,
    ModalDismissed,
    DraftEdited(DraftField),
    DraftSubmitted,
    Created(Result<TransactionDto>),

    ChatInputChanged(String),
    ChatModeChanged(ChatMode),
    ChatSubmitted,
    Categorized(Result<CategorizationResult>),
    AdviceReceived(Result<AdviceResult>),
}

/// A request the dashboard wants issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchTransactions,
    CreateTransaction(CreateTransactionRequest),
    Categorize(CategorizeRequest),
    RequestAdvice(AdviceRequest),
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    feed: FetchState<Vec<TransactionDto>>,
    draft: TransactionDraft,
    modal_open: bool,
    submit: SubmitState,
    chat: Conversation,
    today: fn() -> NaiveDate,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Uses `today` to date fresh drafts.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            feed: FetchState::NotStarted,
            draft: TransactionDraft::new(today()),
            modal_open: false,
            submit: SubmitState::Idle,
            chat: Conversation::default(),
            today,
        }
    }

    pub fn feed(&self) -> &FetchState<Vec<TransactionDto>> {
        &self.feed
    }

    /// Loaded transactions in backend order, then local additions.
    pub fn transactions(&self) -> &[TransactionDto] {
        self.feed.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Spending breakdown, derived fresh from the current transactions.
    pub fn breakdown(&self) -> Vec<CategorySlice> {
        category_breakdown(self.transactions())
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn chat(&self) -> &Conversation {
        &self.chat
    }

    /// Applies one action and returns the request it calls for, if any.
    pub fn apply(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::LoadRequested => {
                if self.feed.is_loading() {
                    debug!("Ignoring load request while one is in flight");
                    return None;
                }
                self.feed = FetchState::Loading;
                Some(Command::FetchTransactions)
            }
            Action::Loaded(Ok(transactions)) => {
                info!("Loaded {} transactions", transactions.len());
                self.feed = FetchState::Success(transactions);
                None
            }
            Action::Loaded(Err(err)) => {
                debug!("Transaction load failed: {}", err);
                self.feed = FetchState::Error(load_error_message(&err));
                None
            }

            Action::ModalOpened => {
                self.modal_open = true;
                None
            }
            Action::ModalDismissed => {
                self.modal_open = false;
                self.reset_draft();
                None
            }
            Action::DraftEdited(field) => {
                self.draft.edit(field);
                None
            }
            Action::DraftSubmitted => {
                if self.submit == SubmitState::Submitting {
                    debug!("Ignoring transaction submit while one is in flight");
                    return None;
                }
                self.submit = SubmitState::Submitting;
                Some(Command::CreateTransaction(self.draft.to_request()))
            }
            Action::Created(Ok(transaction)) => {
                self.submit = SubmitState::Idle;
                info!("Transaction created (ID: {})", transaction.id);
                match self.feed.data_mut() {
                    Some(transactions) => transactions.push(transaction),
                    None => warn!("Created transaction {} before the feed loaded", transaction.id),
                }
                self.modal_open = false;
                self.reset_draft();
                None
            }
            Action::Created(Err(err)) => {
                // The client already logged the failure; the form keeps its content.
                self.submit = SubmitState::Idle;
                debug!("Transaction create failed: {}", err);
                None
            }

            Action::ChatInputChanged(input) => {
                self.chat.set_input(input);
                None
            }
            Action::ChatModeChanged(mode) => {
                self.chat.set_mode(mode);
                None
            }
            Action::ChatSubmitted => self.chat.submit().map(|request| match request {
                ChatRequest::Categorize(request) => Command::Categorize(request),
                ChatRequest::Advice(request) => Command::RequestAdvice(request),
            }),
            Action::Categorized(result) => {
                self.chat.receive_categorization(result);
                None
            }
            Action::AdviceReceived(result) => {
                self.chat.receive_advice(result);
                None
            }
        }
    }

    fn reset_draft(&mut self) {
        self.draft = TransactionDraft::new((self.today)());
    }
}

/// Message shown in place of the dashboard when the initial load fails.
pub fn load_error_message(err: &ApiError) -> String {
    format!(
        "Failed to fetch transactions: {}. Please check if the backend is running.",
        err
    )
}

/// Performs `command` and returns the action that completes it.
#[instrument(skip(api))]
pub async fn execute<A>(api: &A, command: Command) -> Action
where
    A: DashboardApi + ?Sized,
{
    match command {
        Command::FetchTransactions => Action::Loaded(api.list_transactions().await),
        Command::CreateTransaction(request) => Action::Created(api.create_transaction(request).await),
        Command::Categorize(request) => Action::Categorized(api.categorize(request).await),
        Command::RequestAdvice(request) => Action::AdviceReceived(api.advice(request).await),
    }
}

/// Runs `command` and applies its completion, following any further commands.
///
/// The state is borrowed only between awaits, so other events can be applied
/// while a request is pending. `on_change` is called after every applied
/// completion.
pub async fn run_command<A, F>(dashboard: &RefCell<Dashboard>, api: &A, command: Command, on_change: F)
where
    A: DashboardApi + ?Sized,
    F: Fn(),
{
    let mut next = Some(command);
    while let Some(command) = next.take() {
        let completion = execute(api, command).await;
        next = dashboard.borrow_mut().apply(completion);
        on_change();
    }
}
