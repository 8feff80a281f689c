//!
//! Access interfaces for wrapped secrets.
//!

use crate::{Secret, Strategy};

/// Borrow the inner value of a secret.
pub trait PeekInterface<S> {
    /// Only method providing read access to the secret value.
    fn peek(&self) -> &S;
}

/// Consume a secret and hand out the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value.
    fn expose(self) -> S;
}

/// Same as [`ExposeInterface`] for optional secrets.
pub trait ExposeOptionInterface<S> {
    /// Expose the inner value if present.
    fn expose_option(self) -> S;
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}

impl<S, I> ExposeOptionInterface<Option<S>> for Option<Secret<S, I>>
where
    I: Strategy<S>,
{
    fn expose_option(self) -> Option<S> {
        self.map(ExposeInterface::expose)
    }
}
