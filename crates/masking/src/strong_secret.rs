//!
//! Secret that is wiped from memory on drop.
//!

use std::{fmt, marker::PhantomData};

use zeroize::Zeroize;

use crate::{strategy::Strategy, PeekInterface};

///
/// Like [`crate::Secret`], but the inner value is zeroized when the wrapper is dropped.
///
/// Used for short-lived plaintext such as a serialized payload right before it is encrypted.
///
pub struct StrongSecret<S: Zeroize, I = crate::WithType>
where
    I: Strategy<S>,
{
    inner_secret: S,
    marker: PhantomData<I>,
}

impl<S: Zeroize, I> StrongSecret<S, I>
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
}

impl<S: Zeroize, I> PeekInterface<S> for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S: Zeroize, I> From<S> for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S: Zeroize + PartialEq, I> PartialEq for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S: Zeroize, I> fmt::Debug for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S: Zeroize, I> Drop for StrongSecret<S, I>
where
    I: Strategy<S>,
{
    fn drop(&mut self) {
        self.inner_secret.zeroize();
    }
}
