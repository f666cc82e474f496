use std::fmt;
use std::marker::PhantomData;

use crate::alg::{HashAlg, Sha256};
use crate::kdf::{self, LABEL_KEY, LABEL_LEFT, LABEL_RIGHT, LABEL_SEED};
use crate::node::Node;
use crate::wire::WireSeq;
use crate::Error;

/// A seekable, forward-secure sequence of keys derived from a single seed.
///
/// `Seq` is generic over the hash algorithm `A` (default [`Sha256`]); see
/// [`HashAlg`]. The sequence owns a stack of [`Node`]s representing the
/// not-yet-visited right siblings of the traversal; the current position's key
/// material is always the top of that stack.
pub struct Seq<A = Sha256> {
    nodes: Vec<Node>,
    size: usize,
    /// Set once the sequence has been advanced at least once, so that `seek`'s
    /// fresh-sequence precondition can be checked rather than silently violated.
    touched: bool,
    _alg: PhantomData<A>,
}

impl<A: HashAlg> fmt::Debug for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("depth", &self.nodes.len())
            .field("size", &self.size)
            .field("touched", &self.touched)
            .finish()
    }
}

/// Smallest `h` such that `2^h >= max_keys + 1`, i.e. `ceil(log2(max_keys + 1))`.
fn h_max(max_keys: u64) -> u32 {
    let total = max_keys
        .checked_add(1)
        .expect("max_keys is too large to represent the keyspace");
    let mut h = 0_u32;
    let mut cap = 1_u64;
    while cap < total {
        cap = cap
            .checked_shl(1)
            .expect("max_keys is too large to represent the keyspace");
        h += 1;
    }
    h
}

impl<A: HashAlg> Seq<A> {
    /// Constructs a sequence from `seed`, capable of producing up to `max_keys`
    /// keys before exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if `max_keys == 0`: a sequence with no positions is rejected at
    /// construction rather than silently produced (one of the two
    /// implementation choices the scheme allows for this edge case).
    pub fn new(seed: &[u8], max_keys: u64) -> Self {
        assert!(max_keys > 0, "max_keys must be at least 1");
        let size = A::output_len();
        let height = h_max(max_keys);
        let root_key = kdf::prf_native::<A>(LABEL_SEED, seed);
        Seq {
            nodes: vec![Node::new(root_key, height)],
            size,
            touched: false,
            _alg: PhantomData,
        }
    }

    /// Returns the current position's key, `requested_size` bytes long.
    ///
    /// Pure: does not advance the sequence. `requested_size` may differ from the
    /// algorithm's native output length.
    pub fn key(&self, requested_size: usize) -> Vec<u8> {
        let top = self.top();
        let mut out = vec![0_u8; requested_size];
        kdf::prf::<A>(LABEL_KEY, top.key(), &mut out);
        out
    }

    /// Advances to the next position.
    ///
    /// # Panics
    ///
    /// Panics with `"keyspace exhausted"` if the sequence has no further
    /// positions.
    pub fn next(&mut self) {
        self.touched = true;
        let node = self.pop_or_exhausted();
        self.expand_and_push(node);
    }

    /// Advances by `n` positions from a fresh, never-before-advanced sequence.
    ///
    /// Produces the same key as `n` calls to [`Seq::next`], in `O(log n)` hash
    /// evaluations. Calling this on a sequence that has already been advanced is
    /// documented as producing an undefined (but not unsound) position; prefer
    /// [`Seq::superseek`] once any advance has happened.
    ///
    /// # Panics
    ///
    /// Panics with `"keyspace exhausted"` if `n` runs past the last position.
    pub fn seek(&mut self, n: u64) {
        debug_assert!(
            !self.touched,
            "seek() called on an already-advanced sequence; use superseek() instead"
        );
        self.touched = true;
        let root = self.pop_or_exhausted();
        self.descend(root, n);
    }

    /// Advances by `n` positions from any state, already-advanced or fresh.
    ///
    /// Collapses fully-consumed subtrees off the top of the stack before
    /// descending, so that repeated `superseek` calls agree with a single `seek`
    /// of the summed offsets from a fresh sequence.
    ///
    /// # Panics
    ///
    /// Panics with `"keyspace exhausted"` if `n` runs past the last position.
    pub fn superseek(&mut self, n: u64) {
        self.touched = true;
        let mut delta = n;
        let mut cur = self.pop_or_exhausted();
        // A subtree rooted at height h holds 2^h - 1 positions (0 for h == 0,
        // which only arises transiently below and is itself treated as exhausted).
        while delta >= subtree_positions(cur.height()) {
            delta -= subtree_positions(cur.height());
            cur = self.pop_or_exhausted();
        }
        self.descend(cur, delta);
    }

    /// Serializes the current state per the crate's wire format.
    pub fn marshal(&self) -> String {
        WireSeq::from_nodes(&self.nodes, self.size).to_json()
    }

    fn top(&self) -> &Node {
        self.nodes
            .last()
            .unwrap_or_else(|| panic!("keyspace exhausted"))
    }

    fn pop_or_exhausted(&mut self) -> Node {
        self.nodes.pop().unwrap_or_else(|| panic!("keyspace exhausted"))
    }

    /// Pops `node` conceptually: if it is a leaf (height 1, or the degenerate
    /// height 0), nothing further is pushed; otherwise its two height-1-less
    /// children are pushed, right before left, so the left child becomes the new
    /// top.
    fn expand_and_push(&mut self, node: Node) {
        if node.height() > 1 {
            let child_height = node.height() - 1;
            let right_key = kdf::prf_native::<A>(LABEL_RIGHT, node.key());
            let left_key = kdf::prf_native::<A>(LABEL_LEFT, node.key());
            self.nodes.push(Node::new(right_key, child_height));
            self.nodes.push(Node::new(left_key, child_height));
        }
    }

    /// The shared descent loop behind `seek` and the tail of `superseek`: starting
    /// from `cur`, consumes `n` positions by repeatedly choosing the left or right
    /// child, pushing the unvisited sibling back onto the stack, then pushes the
    /// final node.
    fn descend(&mut self, mut cur: Node, mut n: u64) {
        while n > 0 {
            let height = cur
                .height()
                .checked_sub(1)
                .unwrap_or_else(|| panic!("keyspace exhausted"));
            if height == 0 {
                panic!("keyspace exhausted");
            }
            let pow = 1_u64 << height;
            if n < pow {
                let right_key = kdf::prf_native::<A>(LABEL_RIGHT, cur.key());
                self.nodes.push(Node::new(right_key, height));
                let left_key = kdf::prf_native::<A>(LABEL_LEFT, cur.key());
                cur = Node::new(left_key, height);
                n -= 1;
            } else {
                let right_key = kdf::prf_native::<A>(LABEL_RIGHT, cur.key());
                cur = Node::new(right_key, height);
                n -= pow;
            }
        }
        self.nodes.push(cur);
    }
}

/// Number of positions held by a subtree rooted at `height` (`2^h - 1`; `0` for
/// `height == 0`, the degenerate sentinel that only appears transiently while
/// collapsing subtrees in [`Seq::superseek`]).
fn subtree_positions(height: u32) -> u64 {
    (1_u64 << height) - 1
}

impl Seq<Sha256> {
    /// Deserializes a sequence previously produced by [`Seq::marshal`].
    ///
    /// Always restores [`Sha256`] as the hash algorithm, per the wire format's
    /// fixed binding. Treats the restored state conservatively as already
    /// advanced, so a subsequent [`Seq::seek`] call's precondition check will
    /// fire; callers restoring persisted state should use [`Seq::superseek`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Malformed` if the decoded `size` field does not equal
    /// [`Sha256::output_len`]: `size` is derived from the hash algorithm, never
    /// an independent value, so a mismatched declaration is a malformed payload
    /// rather than a request to mix node keys of different lengths.
    pub fn unmarshal(text: &str) -> Result<Self, Error> {
        let (nodes, size) = WireSeq::parse(text)?;
        if size != Sha256::output_len() {
            return Err(Error::Malformed(format!(
                "declared size {size} does not match the SHA-256 output length {}",
                Sha256::output_len()
            )));
        }
        Ok(Seq {
            nodes,
            size,
            touched: true,
            _alg: PhantomData,
        })
    }
}
