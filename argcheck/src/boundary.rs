//! Where validation failures leave the checked code.
//!
//! Checks never log. The layer that decides what a rejection means (a CLI, a
//! request handler, a config loader) calls [`Rejecting::rejecting`], which
//! records the rejection and turns it into an `anyhow::Error`. The original
//! [`ValidationFailure`] stays reachable with `downcast_ref`.

use anyhow::Error;

use crate::error::ValidationFailure;

pub trait Rejecting<T> {
    /// Log the failure (if any) and wrap it with `reject <what>` context.
    fn rejecting(self, what: &str) -> anyhow::Result<T>;
}

impl<T> Rejecting<T> for Result<T, ValidationFailure> {
    fn rejecting(self, what: &str) -> anyhow::Result<T> {
        self.map_err(|failure| {
            tracing::warn!(
                check = failure.check().name(),
                detail = failure.message(),
                "rejected {what}"
            );
            Error::new(failure).context(format!("reject {what}"))
        })
    }
}
