//!
//! Serde-related.
//!

use serde::{de, Deserialize, Serialize, Serializer};

use crate::{PeekInterface, Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d by [`serde`].
///
/// Only types marked with this trait get a [`Serialize`] impl when wrapped in [`Secret`], so
/// a raw field value ends up in a serialized document only where a payload explicitly asks
/// for it.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}
