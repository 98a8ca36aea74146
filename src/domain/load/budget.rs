// SPDX-License-Identifier: MPL-2.0
//! One-shot proxy retry budget.

/// Tracks whether the proxy fallback was already used for the current URL.
///
/// The budget starts unspent and is reset every time a new load starts, so
/// each URL gets at most one proxy attempt, always after its direct attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryBudget {
    spent: bool,
}

impl RetryBudget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the proxy attempt has been used.
    #[must_use]
    pub fn is_spent(self) -> bool {
        self.spent
    }

    /// Spends the budget. Returns `false` if it was already spent.
    pub fn try_spend(&mut self) -> bool {
        if self.spent {
            return false;
        }
        self.spent = true;
        true
    }

    /// Restores the budget for a new URL.
    pub fn reset(&mut self) {
        self.spent = false;
    }
}
