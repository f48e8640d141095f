use std::sync::Arc;

use crate::error::CodecError;
use crate::representation::Representation;
use crate::value::Value;

/// Encode/decode strategy for one mapped member.
///
/// Codecs are immutable, `Arc`-shared value objects: a codec installed on one
/// member map may be shared with any number of others, so reconfiguration is
/// always functional — a capability returns a *new* codec, the receiver is
/// never touched.
///
/// The two `as_*` methods are the capability probe: a codec that supports a
/// capability overrides the accessor to return itself. Conventions check
/// capabilities through them instead of downcasting, and treat `None` as a
/// normal no-op.
pub trait Codec: Send + Sync {
    /// Codec name (for observability — logs, errors).
    fn name(&self) -> &'static str;

    fn encode(&self, value: &Value) -> Result<Value, CodecError>;
    fn decode(&self, value: &Value) -> Result<Value, CodecError>;

    fn as_representation_configurable(&self) -> Option<&dyn RepresentationConfigurable> {
        None
    }

    fn as_child_configurable(&self) -> Option<&dyn ChildCodecConfigurable> {
        None
    }
}

/// Capability: the codec's wire representation can be swapped out.
pub trait RepresentationConfigurable: Codec {
    fn representation(&self) -> Representation;

    /// Return a new, otherwise-identical codec configured for
    /// `representation`. Must not mutate `self`.
    fn with_representation(&self, representation: Representation) -> Arc<dyn Codec>;
}

/// Capability: the codec wraps a child codec (e.g. optional-of-T) that can be
/// swapped out.
pub trait ChildCodecConfigurable: Codec {
    fn child_codec(&self) -> Arc<dyn Codec>;

    /// Return a new wrapper codec around `child`. Must not mutate `self`.
    fn with_child_codec(&self, child: Arc<dyn Codec>) -> Arc<dyn Codec>;
}
