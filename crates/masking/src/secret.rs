//!
//! Wrapper for a raw value the customer entered.
//!

use std::{fmt, marker::PhantomData, str::FromStr};

use crate::{strategy::Strategy, PeekInterface};

///
/// A value that must not show up in logs.
///
/// Reading the value requires an explicit call to [`PeekInterface::peek`] or
/// [`crate::ExposeInterface::expose`]; `Debug` goes through the strategy `I` instead.
///
/// ```
/// use masking::{PeekInterface, Secret};
///
/// let card_number: Secret<String> = Secret::new("4567350000427977".to_string());
///
/// assert_eq!(format!("{card_number:?}"), "*** alloc::string::String ***");
/// assert_eq!(card_number.peek(), "4567350000427977");
/// ```
///
pub struct Secret<S, I = crate::WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }

    /// Transform the inner value without exposing it to the caller's scope.
    pub fn map<T, J>(self, f: impl FnOnce(S) -> T) -> Secret<T, J>
    where
        J: Strategy<T>,
    {
        Secret::new(f(self.inner_secret))
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<I> FromStr for Secret<String, I>
where
    I: Strategy<String>,
{
    type Err = core::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_owned()))
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.inner_secret.clone())
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}
