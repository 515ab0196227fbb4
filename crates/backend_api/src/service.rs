use async_trait::async_trait;
use models::{
    AccountRequest, AlertRuleRequest, BudgetRequest, ChatMessageRequest, FinancialProfileRequest,
    ManualAssetRequest, SavingsGoalRequest, TransactionFilterRequest,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::Result;

/// A validated request handed from the HTTP layer to the finance domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", content = "payload", rename_all = "snake_case")]
pub enum Command {
    CreateAccount(AccountRequest),
    UpdateAccount { id: Uuid, request: AccountRequest },
    ListTransactions(TransactionFilterRequest),
    SendChatMessage(ChatMessageRequest),
    CreateBudget(BudgetRequest),
    UpdateBudget { id: Uuid, request: BudgetRequest },
    CreateSavingsGoal(SavingsGoalRequest),
    UpdateSavingsGoal { id: Uuid, request: SavingsGoalRequest },
    CreateAlertRule(AlertRuleRequest),
    UpdateAlertRule { id: Uuid, request: AlertRuleRequest },
    UpdateFinancialProfile(FinancialProfileRequest),
    CreateManualAsset(ManualAssetRequest),
    UpdateManualAsset { id: Uuid, request: ManualAssetRequest },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateAccount(_) => "create_account",
            Command::UpdateAccount { .. } => "update_account",
            Command::ListTransactions(_) => "list_transactions",
            Command::SendChatMessage(_) => "send_chat_message",
            Command::CreateBudget(_) => "create_budget",
            Command::UpdateBudget { .. } => "update_budget",
            Command::CreateSavingsGoal(_) => "create_savings_goal",
            Command::UpdateSavingsGoal { .. } => "update_savings_goal",
            Command::CreateAlertRule(_) => "create_alert_rule",
            Command::UpdateAlertRule { .. } => "update_alert_rule",
            Command::UpdateFinancialProfile(_) => "update_financial_profile",
            Command::CreateManualAsset(_) => "create_manual_asset",
            Command::UpdateManualAsset { .. } => "update_manual_asset",
        }
    }

    /// Target record for update commands.
    pub fn target_id(&self) -> Option<Uuid> {
        match self {
            Command::UpdateAccount { id, .. }
            | Command::UpdateBudget { id, .. }
            | Command::UpdateSavingsGoal { id, .. }
            | Command::UpdateAlertRule { id, .. }
            | Command::UpdateManualAsset { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Downstream collaborator that receives every accepted request.
/// This abstraction allows plugging in the real domain services without touching the HTTP layer.
#[async_trait]
pub trait FinanceService: Send + Sync {
    async fn dispatch(&self, command: Command) -> Result<Value>;
}

/// Logs each accepted command and answers with an acknowledgement echoing the request.
#[derive(Debug, Default, Clone)]
pub struct AcknowledgingService;

#[async_trait]
impl FinanceService for AcknowledgingService {
    async fn dispatch(&self, command: Command) -> Result<Value> {
        tracing::info!(command = command.name(), id = ?command.target_id(), "Accepted request");

        let envelope = serde_json::to_value(&command)?;
        let request = envelope.get("payload").cloned().unwrap_or(Value::Null);

        Ok(json!({
            "status": "accepted",
            "command": command.name(),
            "request": request,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ChatMessageRequestDraft, Validate};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_acknowledges_with_payload() {
        let chat = ChatMessageRequestDraft {
            message: Some("Can I afford a vacation?".into()),
            conversation_id: None,
        }
        .validate()
        .unwrap();

        let ack = AcknowledgingService
            .dispatch(Command::SendChatMessage(chat))
            .await
            .unwrap();

        assert_eq!(ack["status"], "accepted");
        assert_eq!(ack["command"], "send_chat_message");
        assert_eq!(ack["request"]["message"], "Can I afford a vacation?");
        assert!(ack["request"]["conversationId"].is_null());
    }

    #[tokio::test]
    async fn test_update_payload_carries_id() {
        let id = Uuid::new_v4();
        let command = Command::UpdateBudget {
            id,
            request: BudgetRequest {
                category: Some("Travel".into()),
                monthly_limit: None,
            },
        };
        assert_eq!(command.target_id(), Some(id));

        let ack = AcknowledgingService.dispatch(command).await.unwrap();
        assert_eq!(ack["command"], "update_budget");
        assert_eq!(ack["request"]["id"], id.to_string());
        assert_eq!(ack["request"]["request"]["category"], "Travel");
    }

    #[tokio::test]
    async fn test_amounts_echoed_as_exact_strings() {
        let filter = TransactionFilterRequest {
            min_amount: Some(Decimal::new(1250, 2)),
            max_amount: Some("0.10000000000000000001".parse().unwrap()),
            ..Default::default()
        };

        let ack = AcknowledgingService
            .dispatch(Command::ListTransactions(filter))
            .await
            .unwrap();
        assert_eq!(ack["request"]["minAmount"], "12.50");
        assert_eq!(ack["request"]["maxAmount"], "0.10000000000000000001");
    }

    #[test]
    fn test_create_commands_have_no_target() {
        let command = Command::ListTransactions(TransactionFilterRequest::default());
        assert_eq!(command.name(), "list_transactions");
        assert_eq!(command.target_id(), None);
    }
}
