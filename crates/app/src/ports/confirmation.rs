//! Confirmation port — interactive guard for destructive actions.

/// Asks the operator to confirm a destructive action.
pub trait Confirmation {
    /// Return `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
