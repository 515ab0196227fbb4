use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors};

/// An asset tracked by hand rather than imported from a statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAssetRequest {
	pub name: Option<String>,
	pub asset_type: Option<String>,
	pub asset_class: Option<String>,
	pub current_value: Option<Decimal>,
	pub notes: Option<String>,
}

impl Validate for ManualAssetRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}
