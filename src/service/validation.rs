//! Account payload validation: raw JSON in, typed form or the first problem out.

use crate::error::PayloadError;
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Required string fields, checked in this order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "address", "phone_number"];

/// Validated account fields. `id` and unknown keys are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: Option<NaiveDate>,
}

impl AccountForm {
    pub fn from_json(payload: &Value) -> Result<Self, PayloadError> {
        let obj = payload.as_object().ok_or(PayloadError::NotAnObject)?;
        let [name, email, address, phone_number] = REQUIRED_FIELDS.map(|f| required_str(obj, f));
        Ok(Self {
            name: name?,
            email: email?,
            address: address?,
            phone_number: phone_number?,
            date_joined: optional_date(obj)?,
        })
    }
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, PayloadError> {
    match obj.get(field) {
        None => Err(PayloadError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(PayloadError::InvalidType(field)),
    }
}

fn optional_date(obj: &Map<String, Value>) -> Result<Option<NaiveDate>, PayloadError> {
    match obj.get("date_joined") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| PayloadError::InvalidDate(s.clone())),
        Some(other) => Err(PayloadError::InvalidDate(other.to_string())),
    }
}
