use serde::{Deserializer, Serializer};

/// Serializes a [`RequestId`](crate::RequestId) as its lowercase hex string.
///
/// ```
/// use macid::{RequestId, as_hex_request_id};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_hex_request_id")]
///     id: RequestId,
/// }
/// ```
pub mod as_hex_request_id {
    use super::*;
    use crate::RequestId;

    pub fn serialize<S>(id: &RequestId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RequestId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = RequestId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 24-character hex encoded request id")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                RequestId::from_hex(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(HexVisitor)
    }
}

/// Serializes a [`RequestId`](crate::RequestId) as its 12 raw bytes.
///
/// Deserialization accepts either a byte buffer or a sequence of bytes and
/// rejects any length other than 12.
pub mod as_native_request_id {
    use super::*;
    use crate::{Error, REQUEST_ID_BYTES, RequestId};
    use serde::de::{IgnoredAny, SeqAccess};

    pub fn serialize<S>(id: &RequestId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(id.as_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RequestId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> serde::de::Visitor<'de> for BytesVisitor {
            type Value = RequestId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("12 request id bytes")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                RequestId::from_slice(v).map_err(serde::de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = [0u8; REQUEST_ID_BYTES];
                for (len, slot) in bytes.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| {
                            <A::Error as serde::de::Error>::custom(Error::InvalidLength { len })
                        })?;
                }
                let mut len = REQUEST_ID_BYTES;
                while seq.next_element::<IgnoredAny>()?.is_some() {
                    len += 1;
                }
                if len != REQUEST_ID_BYTES {
                    return Err(serde::de::Error::custom(Error::InvalidLength { len }));
                }
                Ok(RequestId::from_bytes(bytes))
            }
        }

        d.deserialize_bytes(BytesVisitor)
    }
}
