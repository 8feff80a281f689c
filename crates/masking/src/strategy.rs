use core::fmt;

/// Decides what `Debug` prints for a wrapped secret.
pub trait Strategy<T> {
    /// Write the masked representation of `value`.
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Prints the name of the wrapped type between asterisks, e.g. `*** alloc::string::String ***`.
#[derive(Debug)]
pub enum WithType {}

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "*** {} ***", std::any::type_name::<T>())
    }
}

/// Prints `*** ***` regardless of the wrapped type.
#[derive(Debug)]
pub enum WithoutType {}

impl<T> Strategy<T> for WithoutType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ***")
    }
}
