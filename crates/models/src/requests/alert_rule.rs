use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleRequest {
	pub name: Option<String>,
	pub rule_type: Option<String>,
	pub condition_operator: Option<String>,
	pub threshold_amount: Option<Decimal>,
	pub category: Option<String>,
	pub account_id: Option<Uuid>,
}

impl Validate for AlertRuleRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::{RequestError, validate_value};
	use serde_json::json;

	#[test]
	fn test_empty_rule_accepted() {
		let rule = validate_value::<AlertRuleRequest>(json!({})).unwrap();
		assert_eq!(rule, AlertRuleRequest::default());
	}

	#[test]
	fn test_rule_fields_preserved() {
		let account_id = Uuid::new_v4();
		let rule = validate_value::<AlertRuleRequest>(json!({
			"name": "Large dining charge",
			"ruleType": "LARGE_TRANSACTION",
			"conditionOperator": "GREATER_THAN",
			"thresholdAmount": 200,
			"category": "Dining",
			"accountId": account_id
		}))
		.unwrap();

		assert_eq!(rule.name.as_deref(), Some("Large dining charge"));
		assert_eq!(rule.rule_type.as_deref(), Some("LARGE_TRANSACTION"));
		assert_eq!(rule.condition_operator.as_deref(), Some("GREATER_THAN"));
		assert_eq!(rule.threshold_amount, Some(Decimal::new(200, 0)));
		assert_eq!(rule.category.as_deref(), Some("Dining"));
		assert_eq!(rule.account_id, Some(account_id));
	}

	#[test]
	fn test_invalid_account_id_is_malformed() {
		let err = validate_value::<AlertRuleRequest>(json!({"accountId": "not-a-uuid"})).unwrap_err();
		assert!(matches!(err, RequestError::Malformed(_)));
	}
}
