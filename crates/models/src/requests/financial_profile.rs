use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfileRequest {
	pub monthly_income: Option<Decimal>,
	pub income_source: Option<String>,
	pub pay_frequency: Option<String>,
	pub emergency_fund_target_months: Option<i32>,
	pub notes: Option<String>,
}

impl Validate for FinancialProfileRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}
