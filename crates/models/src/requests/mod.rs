//! Inbound request shapes.
//!
//! `AccountRequest` and `ChatMessageRequest` have required fields and are only
//! produced by validating their draft. The remaining shapes have no required
//! fields and validate to themselves.

pub mod account;
pub mod alert_rule;
pub mod budget;
pub mod chat;
pub mod financial_profile;
pub mod manual_asset;
pub mod savings_goal;
pub mod transaction_filter;

pub use account::{AccountRequest, AccountRequestDraft, AccountType};
pub use alert_rule::AlertRuleRequest;
pub use budget::BudgetRequest;
pub use chat::{ChatMessageRequest, ChatMessageRequestDraft};
pub use financial_profile::FinancialProfileRequest;
pub use manual_asset::ManualAssetRequest;
pub use savings_goal::SavingsGoalRequest;
pub use transaction_filter::TransactionFilterRequest;
