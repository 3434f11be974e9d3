use std::marker::PhantomData;

use bytes::Bytes;

use crate::envelope::{format_tag, split_tag, Envelope};
use crate::error::{CodecError, Result};
use crate::message::Message;
use crate::registry::TypeRegistry;

/// Serializes outbound messages and deserializes inbound ones.
///
/// A channel never interprets payload bytes itself; both directions go
/// through this seam. The two ends of a connection must use mutually
/// compatible codecs — same encoding, same type-resolution rules.
pub trait ObjectCodec<R, W> {
    /// Serialize one outbound message to payload bytes.
    fn encode(&self, message: &W) -> Result<Bytes>;

    /// Deserialize payload bytes into one inbound message.
    fn decode(&self, payload: &[u8]) -> Result<R>;
}

/// JSON codec with logical-name type resolution.
///
/// Outbound messages are wrapped in a `{"type": tag, "body": ...}` envelope
/// tagged with the write type's [`Message::TYPE_NAME`], optionally suffixed
/// with a build qualifier. Inbound tags resolve through a [`TypeRegistry`]
/// by simple name, ignoring any qualifier the peer stamped.
pub struct TaggedJsonCodec<R, W> {
    registry: TypeRegistry<R>,
    qualifier: Option<String>,
    _write: PhantomData<fn(&W)>,
}

impl<R, W> TaggedJsonCodec<R, W> {
    /// Create a codec decoding through an explicit registry.
    pub fn new(registry: TypeRegistry<R>) -> Self {
        Self {
            registry,
            qualifier: None,
            _write: PhantomData,
        }
    }

    /// Stamp outbound tags with a build qualifier (`name@qualifier`).
    ///
    /// The peer ignores it during resolution; it exists so logs on either
    /// side can tell which build produced a message.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// The registry inbound tags resolve against.
    pub fn registry(&self) -> &TypeRegistry<R> {
        &self.registry
    }
}

impl<R: Message, W> Default for TaggedJsonCodec<R, W> {
    fn default() -> Self {
        Self::new(TypeRegistry::of())
    }
}

impl<R, W: Message> ObjectCodec<R, W> for TaggedJsonCodec<R, W> {
    fn encode(&self, message: &W) -> Result<Bytes> {
        let body = serde_json::to_value(message).map_err(CodecError::Serialize)?;
        let envelope = Envelope {
            tag: format_tag(W::TYPE_NAME, self.qualifier.as_deref()),
            body,
        };
        let bytes = serde_json::to_vec(&envelope).map_err(CodecError::Serialize)?;
        Ok(Bytes::from(bytes))
    }

    fn decode(&self, payload: &[u8]) -> Result<R> {
        let envelope: Envelope =
            serde_json::from_slice(payload).map_err(CodecError::Deserialize)?;
        let (name, _qualifier) = split_tag(&envelope.tag);
        self.registry.decode(name, envelope.body)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u32,
        name: String,
    }

    impl Message for Record {
        const TYPE_NAME: &'static str = "record";
    }

    #[test]
    fn encode_decode_roundtrip() {
        let codec = TaggedJsonCodec::<Record, Record>::default();
        let record = Record {
            id: 7,
            name: "abc".to_string(),
        };

        let payload = codec.encode(&record).unwrap();
        let decoded = codec.decode(&payload).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn qualifier_is_stamped_but_ignored_on_decode() {
        let writer_codec =
            TaggedJsonCodec::<Record, Record>::default().with_qualifier("2.1.0+build7");
        let reader_codec = TaggedJsonCodec::<Record, Record>::default();

        let record = Record {
            id: 1,
            name: "x".to_string(),
        };
        let payload = writer_codec.encode(&record).unwrap();

        let envelope: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(envelope["type"], "record@2.1.0+build7");

        // A peer built from a different revision still resolves by name.
        assert_eq!(reader_codec.decode(&payload).unwrap(), record);
    }

    #[test]
    fn unregistered_tag_is_rejected() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Other {
            flag: bool,
        }

        impl Message for Other {
            const TYPE_NAME: &'static str = "other";
        }

        let writer_codec = TaggedJsonCodec::<Other, Other>::default();
        let reader_codec = TaggedJsonCodec::<Record, Record>::default();

        let payload = writer_codec.encode(&Other { flag: true }).unwrap();
        let err = reader_codec.decode(&payload).unwrap_err();
        assert!(matches!(err, CodecError::UnknownType(name) if name == "other"));
    }

    #[test]
    fn garbage_payload_is_a_deserialize_error() {
        let codec = TaggedJsonCodec::<Record, Record>::default();
        let err = codec.decode(b"not json at all").unwrap_err();
        assert!(matches!(err, CodecError::Deserialize(_)));
    }

    #[test]
    fn body_shape_mismatch_is_a_deserialize_error() {
        let codec = TaggedJsonCodec::<Record, Record>::default();
        let payload = serde_json::to_vec(&serde_json::json!({
            "type": "record",
            "body": {"id": "seven", "name": "abc"}
        }))
        .unwrap();

        let err = codec.decode(&payload).unwrap_err();
        assert!(matches!(err, CodecError::Deserialize(_)));
    }
}
