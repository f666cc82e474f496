use std::fmt;

use secrecy::{ExposeSecret, Secret};

/// A `(key, height)` pair: the root of a not-yet-visited subtree.
///
/// Height 1 denotes a leaf; height `h > 1` denotes an unexpanded subtree of
/// `2^h - 1` positions. The key is owned and zeroized on drop via [`Secret`].
pub(crate) struct Node {
    key: Secret<Vec<u8>>,
    height: u32,
}

impl Node {
    pub(crate) fn new(key: Vec<u8>, height: u32) -> Self {
        Node {
            key: Secret::new(key),
            height,
        }
    }

    pub(crate) fn key(&self) -> &[u8] {
        self.key.expose_secret()
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &"_")
            .field("height", &self.height)
            .finish()
    }
}
