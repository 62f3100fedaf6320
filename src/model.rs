//! The Account record as stored and as returned to clients.

use chrono::NaiveDate;
use serde::Serialize;

use crate::service::AccountForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

impl Account {
    /// Copy validated fields onto a loaded record. `id` never changes and an
    /// absent `date_joined` keeps the stored date.
    pub fn apply(&mut self, form: AccountForm) {
        self.name = form.name;
        self.email = form.email;
        self.address = form.address;
        self.phone_number = form.phone_number;
        if let Some(date) = form.date_joined {
            self.date_joined = date;
        }
    }

    pub fn location(&self) -> String {
        format!("/accounts/{}", self.id)
    }
}

/// An account that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

impl NewAccount {
    pub fn from_form(form: AccountForm, today: NaiveDate) -> Self {
        Self {
            name: form.name,
            email: form.email,
            address: form.address,
            phone_number: form.phone_number,
            date_joined: form.date_joined.unwrap_or(today),
        }
    }

    pub fn with_id(self, id: i32) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}
