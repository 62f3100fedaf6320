//! In-process `AccountStore` used by tests and local runs without a database.

use super::AccountStore;
use crate::error::AppError;
use crate::model::{Account, NewAccount};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        // ids start at 1, like a SERIAL column
        let id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| AppError::Store("account id sequence exhausted".into()))?;
        inner.next_id = id;
        let account = account.with_id(id);
        inner.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&account.id)
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        *row = account.clone();
        Ok(account.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Account>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().filter(|a| a.name == name).cloned().collect())
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
