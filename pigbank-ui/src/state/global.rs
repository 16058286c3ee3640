//! Global Application State
//!
//! Reactive state management using Leptos signals, one signal per store
//! slice. Slice types come from `pigbank::store`.

use std::collections::HashMap;

use leptos::*;

use pigbank::store::{ExpenseLedger, NewExpense, User};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signed-in user
    pub user: RwSignal<Option<User>>,
    /// Users seen this session, by username; survives sign-out
    pub profiles: RwSignal<HashMap<String, User>>,
    /// The user's expenses
    pub expenses: RwSignal<ExpenseLedger>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
            profiles: create_rw_signal(HashMap::new()),
            expenses: create_rw_signal(ExpenseLedger::default()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    pub fn sign_in(&self, user: User) {
        self.profiles.update(|profiles| {
            profiles.insert(user.username.clone(), user.clone());
        });
        self.user.set(Some(user));
    }

    /// Profile recorded for `username` by an earlier sign-in
    pub fn known_user(&self, username: &str) -> Option<User> {
        self.profiles.with_untracked(|profiles| profiles.get(username).cloned())
    }

    /// Sign out and drop the user's data
    pub fn sign_out(&self) {
        self.user.set(None);
        self.expenses.set(ExpenseLedger::default());
    }

    pub fn add_expense(&self, expense: NewExpense) -> u32 {
        let mut id = 0;
        self.expenses.update(|ledger| id = ledger.add(expense));
        id
    }

    pub fn remove_expense(&self, id: u32) {
        self.expenses.update(|ledger| {
            ledger.remove(id);
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn with_state(f: impl FnOnce(GlobalState)) {
        let runtime = create_runtime();
        f(GlobalState::new());
        runtime.dispose();
    }

    #[test]
    fn test_expense_slice() {
        with_state(|state| {
            let id = state.add_expense(NewExpense {
                title: "Truffles".into(),
                amount: 20.0,
                category: "Food".into(),
                spent_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            });
            assert_eq!(state.expenses.with_untracked(|l| l.len()), 1);

            state.remove_expense(id);
            assert!(state.expenses.with_untracked(|l| l.is_empty()));
        });
    }

    #[test]
    fn test_sign_out_clears_user_data() {
        with_state(|state| {
            state.sign_in(User::new("piglet", Some(12)));
            state.add_expense(NewExpense {
                title: "Mud".into(),
                amount: 1.0,
                category: "Leisure".into(),
                spent_on: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            });

            state.sign_out();

            assert!(state.user.get_untracked().is_none());
            assert!(state.expenses.with_untracked(|l| l.is_empty()));
        });
    }

    #[test]
    fn test_profile_survives_sign_out() {
        with_state(|state| {
            state.sign_in(User::new("piglet", Some(34)));
            state.sign_out();

            let returning = state.known_user("piglet").unwrap();
            assert_eq!(returning.age, Some(34));
            assert!(state.known_user("hog").is_none());
        });
    }
}
