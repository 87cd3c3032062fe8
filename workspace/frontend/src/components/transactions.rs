mod table;
mod transaction_modal;

pub use table::TransactionTable;
pub use transaction_modal::TransactionModal;
