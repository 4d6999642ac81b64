//! `serde` support: a `FixedVect` serializes as a plain sequence, and
//! deserializing a sequence longer than the capacity is an error.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::FixedVect;

impl<T, const N: usize> Serialize for FixedVect<T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedVect<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for VectVisitor<T, N>
        where
            T: Deserialize<'de>,
        {
            type Value = FixedVect<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vect = FixedVect::new();

                while let Some(element) = seq.next_element()? {
                    if vect.push(element).is_err() {
                        return Err(de::Error::invalid_length(vect.len() + 1, &self));
                    }
                }

                Ok(vect)
            }
        }

        deserializer.deserialize_seq(VectVisitor(PhantomData))
    }
}
