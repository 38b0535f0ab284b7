//! World state and its copy/modify/commit protocol

use std::collections::HashMap;

use canon_primitives::Address;

use crate::account::Account;

/// The full address-to-account mapping at a point in execution.
///
/// Accounts are created implicitly on first reference and mutated only
/// through [`State::apply`]; an account that a mutation reduces to the
/// canonical empty form is deleted on commit, so the map never holds an
/// empty account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    accounts: HashMap<Address, Account>,
}

impl State {
    /// Create an empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the account at `address`. Absence is not an error.
    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Look up the account at `address`, yielding a fresh empty account if
    /// absent. The returned value is owned; callers never alias the map.
    pub fn get_or_empty(&self, address: &Address) -> Account {
        self.accounts.get(address).cloned().unwrap_or_default()
    }

    /// Mutate the account at `address` through `transform` and commit the
    /// result, returning the new account value.
    ///
    /// The transform runs on a working copy. On commit: an unchanged account
    /// writes nothing; an account reduced to the canonical empty form is
    /// removed; anything else replaces the entry. This is the only mutation
    /// path into the map.
    pub fn apply<F>(&mut self, address: Address, transform: F) -> Account
    where
        F: FnOnce(&mut Account),
    {
        let old = self.get_or_empty(&address);
        let mut account = old.clone();
        transform(&mut account);

        if account != old {
            if account.is_empty() {
                self.accounts.remove(&address);
            } else {
                self.accounts.insert(address, account.clone());
            }
        }

        account
    }

    /// Number of (non-empty) accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the state holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Read-only iteration over all accounts.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Account)> {
        self.accounts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_primitives::{H256, U256};

    fn addr(n: u64) -> Address {
        Address::from_low_u64(n)
    }

    // ==================== Insert ====================

    #[test]
    fn test_apply_insert_new() {
        let mut state = State::new();
        let address = Address::ZERO;

        state.apply(address, |account| {
            account.balance = U256::from(500u64);
        });

        let expected = Account {
            nonce: 0,
            balance: U256::from(500u64),
            ..Account::default()
        };
        assert_eq!(state.get(&address), Some(&expected));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_apply_insert_empty() {
        let mut state = State::new();

        state.apply(Address::ZERO, |_account| {});

        assert!(state.is_empty());
        assert_eq!(state.get(&Address::ZERO), None);
    }

    // ==================== Remove ====================

    #[test]
    fn test_apply_remove() {
        let mut state = State::new();
        let address = Address::ZERO;
        state.apply(address, |account| {
            account.nonce = 3;
            account.balance = U256::from(500u64);
        });
        assert_eq!(state.len(), 1);

        state.apply(address, |account| {
            account.nonce = 0;
            account.balance = U256::zero();
        });

        assert!(state.is_empty());
        assert_eq!(state.get(&address), None);
    }

    #[test]
    fn test_apply_remove_returns_empty_account() {
        let mut state = State::new();
        let address = addr(9);
        state.apply(address, |account| account.nonce = 1);

        let returned = state.apply(address, |account| account.nonce = 0);
        assert!(returned.is_empty());
        assert!(state.is_empty());
    }

    // ==================== Update ====================

    #[test]
    fn test_apply_update() {
        let mut state = State::new();
        let address = Address::ZERO;
        state.apply(address, |account| {
            account.nonce = 3;
            account.balance = U256::from(500u64);
        });

        state.apply(address, |account| {
            account.nonce += 1;
        });

        let expected = Account {
            nonce: 4,
            balance: U256::from(500u64),
            ..Account::default()
        };
        assert_eq!(state.get(&address), Some(&expected));
    }

    #[test]
    fn test_apply_returns_new_value() {
        let mut state = State::new();
        let returned = state.apply(addr(1), |account| {
            account.balance = U256::from(42u64);
        });
        assert_eq!(returned.balance, U256::from(42u64));
        assert_eq!(state.get(&addr(1)), Some(&returned));
    }

    #[test]
    fn test_apply_unchanged_existing_account() {
        let mut state = State::new();
        let address = addr(2);
        state.apply(address, |account| account.nonce = 7);
        let before = state.clone();

        // Writing the same values back is not a change
        let returned = state.apply(address, |account| account.nonce = 7);
        assert_eq!(state, before);
        assert_eq!(returned.nonce, 7);
    }

    // ==================== Storage and code ====================

    #[test]
    fn test_apply_storage_write_and_clear() {
        let mut state = State::new();
        let address = addr(3);
        let slot = H256::from_bytes([0xaa; 32]);

        state.apply(address, |account| {
            account.storage.insert(slot, U256::from(99u64));
        });
        assert_eq!(
            state.get(&address).and_then(|a| a.storage.get(&slot)),
            Some(&U256::from(99u64))
        );

        // Clearing the only slot empties the account and prunes it
        state.apply(address, |account| {
            account.storage.remove(&slot);
        });
        assert_eq!(state.get(&address), None);
    }

    #[test]
    fn test_apply_code_keeps_account_alive() {
        let mut state = State::new();
        let address = addr(4);
        state.apply(address, |account| {
            account.code = bytes::Bytes::from_static(&[0x60, 0x00, 0x60, 0x00]);
        });

        // Zeroing nonce and balance does not remove an account with code
        state.apply(address, |account| {
            account.nonce = 0;
            account.balance = U256::zero();
        });
        assert!(state.get(&address).is_some());
    }

    // ==================== Pruning invariant ====================

    #[test]
    fn test_no_empty_account_survives_any_sequence() {
        let mut state = State::new();

        state.apply(addr(1), |account| account.balance = U256::from(10u64));
        state.apply(addr(2), |account| account.nonce = 1);
        state.apply(addr(3), |_account| {});
        state.apply(addr(1), |account| account.balance = U256::zero());
        state.apply(addr(2), |account| {
            account.nonce = 0;
            account.balance = U256::zero();
        });
        state.apply(addr(4), |account| {
            account.storage.insert(H256::ZERO, U256::one());
        });
        state.apply(addr(4), |account| {
            account.storage.clear();
        });

        for (address, account) in state.iter() {
            assert!(!account.is_empty(), "empty account left at {address}");
        }
        assert!(state.is_empty());
    }

    // ==================== Lookups ====================

    #[test]
    fn test_get_or_empty_absent() {
        let state = State::new();
        let account = state.get_or_empty(&addr(5));
        assert!(account.is_empty());
        // The returned value is owned; mutating it does not touch the state
        let mut account = account;
        account.nonce = 9;
        assert!(state.is_empty());
    }

    #[test]
    fn test_get_or_empty_present() {
        let mut state = State::new();
        state.apply(addr(6), |account| account.nonce = 2);
        assert_eq!(state.get_or_empty(&addr(6)).nonce, 2);
    }
}
