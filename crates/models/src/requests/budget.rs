use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors};

/// Monthly spending limit for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
	pub category: Option<String>,
	pub monthly_limit: Option<Decimal>,
}

impl Validate for BudgetRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}
