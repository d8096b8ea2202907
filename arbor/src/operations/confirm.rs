//! The confirmation port.
//!
//! Destructive operations ask a [`Confirm`] implementation before touching
//! the tree, unless the caller forces them.

use crate::error::Result;

/// Asks the user a yes/no question.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Returns `true` if the user agreed to `question`.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained (e.g. closed input).
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// A fixed answer, for non-interactive callers.
///
/// # Examples
///
/// ```
/// use arbor::operations::{Confirm, FixedAnswer};
///
/// let mut answer = FixedAnswer(false);
/// assert!(!answer.confirm("Proceed?").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        log::debug!("answering {} to: {question}", if self.0 { "yes" } else { "no" });
        Ok(self.0)
    }
}
