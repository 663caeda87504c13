//! `serde` support for [`CircBuf`](crate::CircBuf).
//!
//! - **Serialize**: as a sequence of the logical elements, front to back.
//! - **Deserialize**: from any sequence; the buffer grows to fit, so no
//!   element is ever dropped. The resulting capacity equals the element
//!   count and spare capacity does not survive a round trip.

use core::fmt;
use core::marker::PhantomData;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::circbuf::CircBuf;

impl<T: Serialize> Serialize for CircBuf<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct CircBufVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for CircBufVisitor<T> {
    type Value = CircBuf<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = CircBuf::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(element) = a.next_element::<T>()? {
            if out.is_full() {
                out.grow_amortized();
            }
            out.push_back_expecting_space_available(element);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CircBuf<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(CircBufVisitor(PhantomData))
    }
}
