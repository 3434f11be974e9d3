//! Pluggable serialization for object channels.
//!
//! Payloads cross the wire as a JSON envelope `{"type": tag, "body": value}`.
//! The tag is a *stable logical type name* — `name` or `name@qualifier` —
//! rather than any build-specific identity. Decoding resolves the simple
//! name against a [`TypeRegistry`] and ignores the qualifier, so two
//! processes built independently from different revisions of the
//! message-defining crate still resolve each other's messages.
//!
//! The [`ObjectCodec`] trait is the seam a channel consumes; both ends of a
//! connection must use mutually compatible codecs.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod message;
pub mod registry;

pub use codec::{ObjectCodec, TaggedJsonCodec};
pub use envelope::split_tag;
pub use error::{CodecError, Result};
pub use message::Message;
pub use registry::TypeRegistry;
