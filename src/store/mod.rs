//! Shared State Container
//!
//! One process-wide store, owned by the application instance and handed to
//! views as a cloneable handle. State is split into typed slices; each slice
//! has its own read/write accessors so access stays auditable.
//!
//! - **session**: the signed-in user
//! - **expenses**: the user's expense ledger

pub mod expenses;
pub mod session;

pub use expenses::{Expense, ExpenseLedger, NewExpense};
pub use session::{Session, User};

use std::sync::{Arc, PoisonError, RwLock};

/// Handle to one slice of shared state
#[derive(Debug, Default)]
pub struct Slice<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Slice<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Read the slice
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutate the slice
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Replace the slice value
    pub fn set(&self, value: T) {
        self.update(|slot| *slot = value);
    }
}

impl<T: Clone> Slice<T> {
    /// Snapshot of the slice value
    pub fn get(&self) -> T {
        self.read(T::clone)
    }
}

/// Process-wide application store
#[derive(Debug, Clone, Default)]
pub struct Store {
    session: Slice<Session>,
    expenses: Slice<ExpenseLedger>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Slice<Session> {
        &self.session
    }

    pub fn expenses(&self) -> &Slice<ExpenseLedger> {
        &self.expenses
    }

    /// Drop all user state (sign-out)
    pub fn reset(&self) {
        self.session.set(Session::default());
        self.expenses.set(ExpenseLedger::default());
        tracing::debug!("Store reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let view_handle = store.clone();

        store.session().update(|s| s.sign_in(User::new("oink", Some(31))));

        let name = view_handle
            .session()
            .read(|s| s.user().map(|u| u.username.clone()));
        assert_eq!(name.as_deref(), Some("oink"));
    }

    #[test]
    fn test_slices_are_independent() {
        let store = Store::new();
        store.expenses().update(|ledger| {
            ledger.add(NewExpense {
                title: "Acorns".into(),
                amount: 4.5,
                category: "Food".into(),
                spent_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            })
        });

        assert_eq!(store.expenses().read(ExpenseLedger::len), 1);
        assert!(!store.session().read(Session::is_signed_in));
    }

    #[test]
    fn test_reset() {
        let store = Store::new();
        store.session().update(|s| s.sign_in(User::new("oink", None)));
        store.expenses().update(|ledger| {
            ledger.add(NewExpense {
                title: "Mud bath".into(),
                amount: 12.0,
                category: "Leisure".into(),
                spent_on: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            })
        });

        store.reset();

        assert!(!store.session().read(Session::is_signed_in));
        assert!(store.expenses().read(ExpenseLedger::is_empty));
    }

    #[test]
    fn test_get_and_set() {
        let slice = Slice::new(3_u32);
        slice.set(5);
        assert_eq!(slice.get(), 5);
    }
}
