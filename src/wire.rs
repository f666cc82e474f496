//! Versioned, self-describing encoding of the tree state for persistence.
//!
//! The wire format is a JSON object with three top-level fields (`nodes`, `size`,
//! `version`); unknown fields are rejected. Node keys are encoded as standard
//! base64 with padding. The hash selector is never present: deserialization always
//! restores [`crate::Sha256`].

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::Node;

/// The single serialization format version this crate understands.
pub(crate) const VERSION: &str = "2020-02-20";

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct WireNode {
    #[serde(with = "base64_bytes")]
    k: Vec<u8>,
    h: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct WireSeq {
    nodes: Vec<WireNode>,
    size: usize,
    version: String,
}

impl WireSeq {
    pub(crate) fn from_nodes(nodes: &[Node], size: usize) -> Self {
        WireSeq {
            nodes: nodes
                .iter()
                .map(|node| WireNode {
                    k: node.key().to_vec(),
                    h: node.height(),
                })
                .collect(),
            size,
            version: VERSION.to_string(),
        }
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serializing a Seq never fails")
    }

    /// Parses and validates `text`, returning the declared `size` and the node
    /// stack in bottom-to-top order. Does not restore any particular hash
    /// algorithm; that binding happens in [`crate::Seq::unmarshal`].
    pub(crate) fn parse(text: &str) -> Result<(Vec<Node>, usize), Error> {
        let wire: WireSeq = serde_json::from_str(text)?;
        if wire.version != VERSION {
            return Err(Error::UnknownVersion(wire.version));
        }
        let mut nodes = Vec::with_capacity(wire.nodes.len());
        for wire_node in wire.nodes {
            if wire_node.k.len() != wire.size {
                return Err(Error::Malformed(format!(
                    "node key length {} does not match declared size {}",
                    wire_node.k.len(),
                    wire.size
                )));
            }
            nodes.push(Node::new(wire_node.k, wire_node.h));
        }
        Ok((nodes, wire.size))
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
