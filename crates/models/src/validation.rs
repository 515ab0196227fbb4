//! Required-field validation for inbound request shapes.
//!
//! Every shape implements [`Validate`]. Constraints are plain functions on a
//! [`Violations`] collector, so a single pass reports every failed constraint
//! instead of stopping at the first one.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A single failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
	pub field: &'static str,
	pub message: String,
}

/// Non-empty, ordered batch of violations for one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
	pub fn violations(&self) -> &[Violation] {
		&self.0
	}

	/// Human-readable messages in field declaration order.
	pub fn messages(&self) -> Vec<String> {
		self.0.iter().map(|v| v.message.clone()).collect()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.messages().join("; "))
	}
}

/// Accumulates violations while a draft is checked field by field.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
		self.0.push(Violation {
			field,
			message: message.into(),
		});
	}

	/// Present and not whitespace-only. The value passes through unchanged.
	pub fn not_blank(
		&mut self,
		field: &'static str,
		value: Option<String>,
		message: &str,
	) -> Option<String> {
		match value {
			Some(s) if !s.trim().is_empty() => Some(s),
			_ => {
				self.push(field, message);
				None
			}
		}
	}

	pub fn not_null<T>(&mut self, field: &'static str, value: Option<T>, message: &str) -> Option<T> {
		if value.is_none() {
			self.push(field, message);
		}
		value
	}

	/// Membership check against a closed set parsed through `FromStr`.
	pub fn member_of<T: FromStr>(&mut self, field: &'static str, raw: &str, message: &str) -> Option<T> {
		match raw.parse::<T>() {
			Ok(parsed) => Some(parsed),
			Err(_) => {
				self.push(field, message);
				None
			}
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_errors(self) -> ValidationErrors {
		ValidationErrors(self.0)
	}
}

/// Turns an unvalidated draft into its typed, validated form.
pub trait Validate: Sized {
	type Valid;

	fn validate(self) -> Result<Self::Valid, ValidationErrors>;
}

#[derive(Debug, Error)]
pub enum RequestError {
	#[error("Malformed request: {0}")]
	Malformed(#[from] serde_json::Error),

	#[error("Validation failed: {0}")]
	Invalid(#[from] ValidationErrors),
}

/// Deserializes untyped key/value data into draft `D` and validates it.
pub fn validate_value<D>(value: Value) -> Result<D::Valid, RequestError>
where
	D: Validate + DeserializeOwned,
{
	let draft: D = serde_json::from_value(value)?;
	Ok(draft.validate()?)
}
