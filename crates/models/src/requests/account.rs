use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Violations};

pub const ACCOUNT_NAME_REQUIRED: &str = "Account name is required";
pub const ACCOUNT_TYPE_REQUIRED: &str = "Account type is required";
pub const ACCOUNT_TYPE_UNKNOWN: &str =
	"Account type must be one of CHECKING, SAVINGS, CREDIT_CARD, LOAN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
	Checking,
	Savings,
	CreditCard,
	Loan,
}

impl AccountType {
	pub const ALL: [AccountType; 4] = [
		AccountType::Checking,
		AccountType::Savings,
		AccountType::CreditCard,
		AccountType::Loan,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			AccountType::Checking => "CHECKING",
			AccountType::Savings => "SAVINGS",
			AccountType::CreditCard => "CREDIT_CARD",
			AccountType::Loan => "LOAN",
		}
	}
}

impl fmt::Display for AccountType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAccountType(pub String);

impl FromStr for AccountType {
	type Err = UnknownAccountType;

	/// Exact, case-sensitive match on the wire name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		AccountType::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| UnknownAccountType(s.to_string()))
	}
}

/// Body of an account create/update request as received, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequestDraft {
	pub name: Option<String>,
	pub institution: Option<String>,
	#[serde(rename = "type")]
	pub account_type: Option<String>,
	pub last4: Option<String>,
	pub credit_limit: Option<Decimal>,
	pub current_balance: Option<Decimal>,
	pub available_credit: Option<Decimal>,
	pub apr: Option<Decimal>,
	pub promo_apr: Option<Decimal>,
	pub promo_apr_end_date: Option<NaiveDate>,
	pub payment_due_day: Option<i32>,
	pub min_payment: Option<Decimal>,
	pub rewards_program: Option<String>,
	pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
	pub name: String,
	pub institution: Option<String>,
	#[serde(rename = "type")]
	pub account_type: AccountType,
	pub last4: Option<String>,
	pub credit_limit: Option<Decimal>,
	pub current_balance: Option<Decimal>,
	pub available_credit: Option<Decimal>,
	pub apr: Option<Decimal>,
	pub promo_apr: Option<Decimal>,
	pub promo_apr_end_date: Option<NaiveDate>,
	pub payment_due_day: Option<i32>,
	pub min_payment: Option<Decimal>,
	pub rewards_program: Option<String>,
	pub color: Option<String>,
}

impl Validate for AccountRequestDraft {
	type Valid = AccountRequest;

	fn validate(self) -> Result<AccountRequest, ValidationErrors> {
		let mut violations = Violations::new();

		let name = violations.not_blank("name", self.name, ACCOUNT_NAME_REQUIRED);
		let account_type = violations
			.not_null("type", self.account_type, ACCOUNT_TYPE_REQUIRED)
			.and_then(|raw| violations.member_of::<AccountType>("type", &raw, ACCOUNT_TYPE_UNKNOWN));

		match (name, account_type) {
			(Some(name), Some(account_type)) => Ok(AccountRequest {
				name,
				institution: self.institution,
				account_type,
				last4: self.last4,
				credit_limit: self.credit_limit,
				current_balance: self.current_balance,
				available_credit: self.available_credit,
				apr: self.apr,
				promo_apr: self.promo_apr,
				promo_apr_end_date: self.promo_apr_end_date,
				payment_due_day: self.payment_due_day,
				min_payment: self.min_payment,
				rewards_program: self.rewards_program,
				color: self.color,
			}),
			_ => Err(violations.into_errors()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::{RequestError, validate_value};
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_minimal_account_accepted() {
		let account = validate_value::<AccountRequestDraft>(json!({
			"name": "Chase Visa",
			"type": "CREDIT_CARD"
		}))
		.unwrap();

		assert_eq!(account.name, "Chase Visa");
		assert_eq!(account.account_type, AccountType::CreditCard);
		assert_eq!(account.institution, None);
		assert_eq!(account.last4, None);
		assert_eq!(account.credit_limit, None);
		assert_eq!(account.promo_apr_end_date, None);
		assert_eq!(account.payment_due_day, None);
		assert_eq!(account.color, None);
	}

	#[test]
	fn test_blank_name_rejected() {
		let err = validate_value::<AccountRequestDraft>(json!({
			"name": "  ",
			"type": "CREDIT_CARD"
		}))
		.unwrap_err();

		match err {
			RequestError::Invalid(errors) => {
				assert_eq!(errors.messages(), vec![ACCOUNT_NAME_REQUIRED]);
			}
			other => panic!("expected validation failure, got {other:?}"),
		}
	}

	#[test]
	fn test_missing_type_rejected() {
		let draft = AccountRequestDraft {
			name: Some("Ally Savings".into()),
			..Default::default()
		};
		let errors = draft.validate().unwrap_err();
		assert_eq!(errors.messages(), vec![ACCOUNT_TYPE_REQUIRED]);
		assert_eq!(errors.violations()[0].field, "type");
	}

	#[test]
	fn test_empty_body_reports_both_violations() {
		let errors = AccountRequestDraft::default().validate().unwrap_err();
		assert_eq!(
			errors.messages(),
			vec![ACCOUNT_NAME_REQUIRED, ACCOUNT_TYPE_REQUIRED]
		);
	}

	#[test]
	fn test_unknown_type_is_a_violation() {
		let draft = AccountRequestDraft {
			name: Some("Brokerage".into()),
			account_type: Some("credit_card".into()),
			..Default::default()
		};
		let errors = draft.validate().unwrap_err();
		assert_eq!(errors.messages(), vec![ACCOUNT_TYPE_UNKNOWN]);
	}

	#[test]
	fn test_null_fields_treated_as_absent() {
		let err = validate_value::<AccountRequestDraft>(json!({
			"name": null,
			"type": null,
			"institution": null
		}))
		.unwrap_err();
		assert!(matches!(err, RequestError::Invalid(ref e) if e.len() == 2));
	}

	#[test]
	fn test_wrong_semantic_type_is_malformed() {
		let err = validate_value::<AccountRequestDraft>(json!({
			"name": "Chase Visa",
			"type": "CREDIT_CARD",
			"creditLimit": "not a number"
		}))
		.unwrap_err();
		assert!(matches!(err, RequestError::Malformed(_)));
	}

	#[test]
	fn test_all_fields_preserved() {
		let account = validate_value::<AccountRequestDraft>(json!({
			"name": "Citi Double Cash",
			"institution": "Citi",
			"type": "CREDIT_CARD",
			"last4": "0042",
			"creditLimit": 12000.00,
			"currentBalance": 1834.27,
			"availableCredit": 10165.73,
			"apr": 24.99,
			"promoApr": 0.0,
			"promoAprEndDate": "2026-03-31",
			"paymentDueDay": 15,
			"minPayment": 35.00,
			"rewardsProgram": "Cashback 2%",
			"color": "#1e40af"
		}))
		.unwrap();

		assert_eq!(account.institution.as_deref(), Some("Citi"));
		assert_eq!(account.last4.as_deref(), Some("0042"));
		assert_eq!(account.credit_limit, Some(Decimal::new(1200000, 2)));
		assert_eq!(account.current_balance, Some(Decimal::new(183427, 2)));
		assert_eq!(account.available_credit, Some(Decimal::new(1016573, 2)));
		assert_eq!(account.apr, Some(Decimal::new(2499, 2)));
		assert_eq!(account.promo_apr, Some(Decimal::ZERO));
		assert_eq!(
			account.promo_apr_end_date,
			NaiveDate::from_ymd_opt(2026, 3, 31)
		);
		assert_eq!(account.payment_due_day, Some(15));
		assert_eq!(account.min_payment, Some(Decimal::new(35, 0)));
		assert_eq!(account.rewards_program.as_deref(), Some("Cashback 2%"));
		assert_eq!(account.color.as_deref(), Some("#1e40af"));
	}

	#[test]
	fn test_account_type_wire_names() {
		for t in AccountType::ALL {
			assert_eq!(t.as_str().parse::<AccountType>(), Ok(t));
			assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
		}
		assert!("Savings".parse::<AccountType>().is_err());
	}

	proptest! {
		#[test]
		fn whitespace_names_always_rejected(name in "[ \t\r\n]{0,12}") {
			let draft = AccountRequestDraft {
				name: Some(name),
				account_type: Some("CHECKING".into()),
				..Default::default()
			};
			let errors = draft.validate().unwrap_err();
			prop_assert_eq!(errors.messages(), vec![ACCOUNT_NAME_REQUIRED.to_string()]);
		}

		#[test]
		fn non_blank_names_kept_verbatim(name in "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,20}") {
			let draft = AccountRequestDraft {
				name: Some(name.clone()),
				account_type: Some("LOAN".into()),
				..Default::default()
			};
			let account = draft.validate().unwrap();
			prop_assert_eq!(account.name, name);
			prop_assert_eq!(account.account_type, AccountType::Loan);
		}
	}
}
