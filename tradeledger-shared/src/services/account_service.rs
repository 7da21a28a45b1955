/// Account CRUD
///
/// Updates and deletes read the account first and only write when it
/// exists. There is no locking between the read and the write, so two
/// concurrent updates resolve last-writer-wins.

use std::sync::Arc;

use tracing::{debug, info};

use super::ServiceResult;
use crate::models::{Account, AccountType, CreateAccount, UpdateAccount};
use crate::stores::AccountStore;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Creates an account with exactly the supplied balances and type
    ///
    /// Balance signs are not checked.
    pub async fn create_account(
        &self,
        user_id: i64,
        balance_usd: f64,
        balance_btc: f64,
        account_type: Option<AccountType>,
    ) -> ServiceResult<Account> {
        let account = self
            .store
            .insert_account(CreateAccount {
                user_id,
                balance_usd,
                balance_btc,
                account_type,
            })
            .await?;

        info!(account_id = account.id, user_id, "Account created");
        Ok(account)
    }

    pub async fn get_account(&self, account_id: i64) -> ServiceResult<Option<Account>> {
        Ok(self.store.find_account(account_id).await?)
    }

    /// Applies the supplied fields and writes the account back
    ///
    /// Returns `None`, without writing, if the account does not exist.
    pub async fn update_account(
        &self,
        account_id: i64,
        update: UpdateAccount,
    ) -> ServiceResult<Option<Account>> {
        let Some(mut account) = self.store.find_account(account_id).await? else {
            debug!(account_id, "Update skipped, account not found");
            return Ok(None);
        };

        update.apply_to(&mut account);

        let saved = self.store.save_account(&account).await?;
        if saved.is_some() {
            info!(account_id, "Account updated");
        }
        Ok(saved)
    }

    /// Deletes the account, returning whether it existed
    pub async fn delete_account(&self, account_id: i64) -> ServiceResult<bool> {
        if self.store.find_account(account_id).await?.is_none() {
            debug!(account_id, "Delete skipped, account not found");
            return Ok(false);
        }

        let deleted = self.store.delete_account(account_id).await?;
        if deleted {
            info!(account_id, "Account deleted");
        }
        Ok(deleted)
    }

    pub async fn get_accounts_by_user(&self, user_id: i64) -> ServiceResult<Vec<Account>> {
        Ok(self.store.list_accounts_by_user(user_id).await?)
    }
}
