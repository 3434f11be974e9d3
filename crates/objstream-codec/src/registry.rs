use std::collections::HashMap;

use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::message::Message;

type DecodeFn<T> = fn(Value) -> Result<T>;

/// Name-keyed registry of message decoders.
///
/// The type-resolution half of a channel: inbound payloads carry a logical
/// type tag, and the registry maps each simple name to a decoder producing
/// the channel's read type. Registering the variants of a request union
/// under their own names is the expected use for asymmetric channels.
pub struct TypeRegistry<T> {
    decoders: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> TypeRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register message type `M`, converted into the read type via `Into`.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register<M>(&mut self) -> &mut Self
    where
        M: Message + Into<T>,
    {
        self.decoders.insert(M::TYPE_NAME, decode_into::<M, T>);
        self
    }

    /// Decode a message body previously tagged with `name`.
    pub fn decode(&self, name: &str, body: Value) -> Result<T> {
        match self.decoders.get(name) {
            Some(decode) => decode(body),
            None => Err(CodecError::UnknownType(name.to_string())),
        }
    }

    /// Check whether a simple name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.decoders.contains_key(name)
    }

    /// Registered simple names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.decoders.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T: Message> TypeRegistry<T> {
    /// Registry resolving only the read type itself.
    pub fn of() -> Self {
        let mut registry = Self::new();
        registry.register::<T>();
        registry
    }
}

impl<T> Default for TypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_into<M, T>(body: Value) -> Result<T>
where
    M: Message + Into<T>,
{
    let message: M = serde_json::from_value(body).map_err(CodecError::Deserialize)?;
    Ok(message.into())
}
