use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalRequest {
	pub name: Option<String>,
	pub category: Option<String>,
	pub target_amount: Option<Decimal>,
	pub current_amount: Option<Decimal>,
	pub target_date: Option<NaiveDate>,
	pub linked_account_id: Option<Uuid>,
	pub color: Option<String>,
	pub notes: Option<String>,
}

impl Validate for SavingsGoalRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}
