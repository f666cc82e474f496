// Copyright 2018 Alex Ostrovski
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Seekable, forward-secure sequential key generation over a generic HKDF.
//!
//! This crate implements the binary-tree SSKG of Marson & Poettering: a single
//! seed evolves into a deterministic sequence of keys `k_0, k_1, ..., k_{N-1}`
//! with three properties:
//!
//! - **Forward security.** Given the state at position `i`, recovering any
//!   earlier key `k_j` with `j < i` is infeasible.
//! - **Fast advance.** [`Seq::next`] costs `O(1)` hash evaluations.
//! - **Fast seek.** [`Seq::seek`] and [`Seq::superseek`] jump forward by `n`
//!   positions in `O(log n)` hash evaluations and `O(log n)` memory.
//!
//! # How it works
//!
//! The current position is represented not as a single counter but as a stack of
//! *nodes*: the roots of right-sibling subtrees not yet visited. Advancing pops
//! the top node and, unless it is a leaf, pushes its two children (right, then
//! left), so the new top is always the next position in an in-order traversal of
//! the complete binary tree. Seeking skips whole subtrees in one hash evaluation
//! per level instead of one per position.
//!
//! Each node's key is derived from its parent via [HKDF](https://tools.ietf.org/html/rfc5869)
//! with a role-specific label (`"seed"`, `"key"`, `"left"`, `"right"`); the
//! externally visible key at a position is itself one more derivation away from
//! the node that represents it, so the node's own key material is never handed
//! out directly.
//!
//! # Example
//!
//! ```
//! use sskg::Seq;
//!
//! let mut seq = Seq::new(&[0; 32], 1_000);
//! let k0 = seq.key(32);
//! seq.next();
//! let k1 = seq.key(32);
//! assert_ne!(k0, k1);
//!
//! // Jump ahead on a fresh sequence in O(log n) hash evaluations.
//! let mut jumped = Seq::new(&[0; 32], 1_000);
//! jumped.seek(1);
//! assert_eq!(jumped.key(32), k1);
//!
//! // Persist and restore.
//! let text = seq.marshal();
//! let restored = sskg::Seq::unmarshal(&text).unwrap();
//! assert_eq!(restored.key(32), seq.key(32));
//! ```
//!
//! # Non-goals
//!
//! Rewinding to an earlier position, authenticated encryption of the serialized
//! state (wrap it yourself if needed), rekeying or multi-seed composition, and
//! thread safety of a single [`Seq`] (serialize your own mutations).

#![deny(missing_docs, missing_debug_implementations)]

mod alg;
mod error;
mod kdf;
mod node;
mod seq;
mod wire;

pub use crate::alg::{HashAlg, Sha256};
pub use crate::error::Error;
pub use crate::seq::Seq;
