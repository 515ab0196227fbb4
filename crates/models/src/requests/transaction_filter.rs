use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::validation::{Validate, ValidationErrors};

pub const DEFAULT_PAGE: i32 = 0;
pub const DEFAULT_PAGE_SIZE: i32 = 50;

pub fn default_page() -> i32 {
	DEFAULT_PAGE
}

pub fn default_page_size() -> i32 {
	DEFAULT_PAGE_SIZE
}

/// An explicit `null` page falls back to the default, like an absent one.
pub fn page_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
	Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_PAGE))
}

pub fn size_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
	Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_PAGE_SIZE))
}

/// Transaction listing criteria. Arrives either as a JSON body or as URL query
/// parameters; `page` and `size` fall back to 0 and 50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilterRequest {
	pub account_id: Option<Uuid>,
	pub category: Option<String>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
	pub min_amount: Option<Decimal>,
	pub max_amount: Option<Decimal>,
	pub search: Option<String>,
	#[serde(default = "default_page", deserialize_with = "page_or_default")]
	pub page: i32,
	#[serde(default = "default_page_size", deserialize_with = "size_or_default")]
	pub size: i32,
}

impl Default for TransactionFilterRequest {
	fn default() -> Self {
		Self {
			account_id: None,
			category: None,
			start_date: None,
			end_date: None,
			min_amount: None,
			max_amount: None,
			search: None,
			page: DEFAULT_PAGE,
			size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl TransactionFilterRequest {
	/// Free-text search over all accounts.
	pub fn search(query: impl Into<String>, page: i32, size: i32) -> Self {
		Self {
			search: Some(query.into()),
			page,
			size,
			..Self::default()
		}
	}

	/// Scopes the filter to one account, replacing any account already set.
	pub fn for_account(mut self, account_id: Uuid) -> Self {
		self.account_id = Some(account_id);
		self
	}
}

impl Validate for TransactionFilterRequest {
	type Valid = Self;

	fn validate(self) -> Result<Self, ValidationErrors> {
		Ok(self)
	}
}
