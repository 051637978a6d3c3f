//! Elementwise structural clamp/min/max engine.
//!
//! Decomposes a value into its structural constituents, applies the operation
//! to corresponding constituents of all operands, and reassembles the result.
//! Three structural kinds are supported, each with its own rule set
//! (one-per-kind arms, like the submodule split below):
//!
//! - **Primitives** ([`primitive`]): totally-ordered scalars. Integers,
//!   `bool`, `char`, `String` (lexicographic), `f32`/`f64` under the IEEE-754
//!   total order, plus any `Ord + Clone` type registered through
//!   [`elementwise_ordered!`](crate::elementwise_ordered). Clamp fails iff
//!   `lo > hi`; two-argument min/max cannot fail.
//! - **Vectors** ([`vector`]): `Vec<T>` of any supported element. Bounds of
//!   length one broadcast against every target element; equal lengths pair
//!   up; anything else is an incompatible shape.
//! - **Records** ([`aggregate`], [`dynamic`]): fixed-shape composites. The
//!   operation distributes over the fields in declaration order and the
//!   result is rebuilt from the per-field results. Registration is explicit:
//!   [`elementwise_record!`](crate::elementwise_record) for named structs,
//!   built-in impls for tuples (up to 12), arrays, and `Box`, and a
//!   [`serde_json::Value`] impl for values whose shape is only known at
//!   runtime.
//!
//! Failure is absence: every operation returns `Option<T>` and `None` carries
//! no reason. An invalid range (`lo > hi` at some leaf), an incompatible
//! vector shape, and an empty vector operand to clamp are indistinguishable
//! at the call site. Callers treat `None` as "leave the original value
//! alone".
//!
//! Failure propagation is intentionally asymmetric between the operations:
//!
//! - clamp aborts the enclosing vector or record wholesale on the first
//!   failing constituent; no partial output.
//! - binary min/max over a vector SKIPS a failing element pair and keeps
//!   going, yielding a shorter vector. Built-in primitives never fail, so
//!   the skip path only fires for registered types with partial semantics.
//!
//! All operations are pure: inputs are read-only, outputs freshly built, no
//! caching, safe to call from any number of threads.

pub mod aggregate;
pub mod dynamic;
pub mod primitive;
pub mod vector;

/// Capability contract for elementwise-operable values.
///
/// An implementation decides how a value decomposes: not at all (primitive
/// leaves), index-by-index (vectors), or field-by-field (records). Consumers
/// normally go through the free functions [`elementwise_clamp`],
/// [`elementwise_min`] and [`elementwise_max`] rather than the trait methods.
///
/// Implementations must not panic; every failure is `None`.
pub trait Elementwise: Sized {
    /// Clamp `target` into `[lo, hi]`, constituent by constituent.
    ///
    /// `None` when the range is invalid at some leaf (`lo > hi`), when a
    /// vector shape is incompatible, or when a vector operand is empty.
    fn elementwise_clamp(target: &Self, lo: &Self, hi: &Self) -> Option<Self>;

    /// Elementwise minimum of `a` and `b`.
    fn elementwise_min(a: &Self, b: &Self) -> Option<Self>;

    /// Elementwise maximum of `a` and `b`.
    fn elementwise_max(a: &Self, b: &Self) -> Option<Self>;
}

/// Clamp `target` into `[lo, hi]`.
///
/// For primitives this is the usual `max(lo, min(target, hi))` under the
/// type's total order; for vectors and records the clamp distributes over
/// the constituents (see the module docs for the vector broadcast table).
///
/// Some examples:
///
/// ```text
/// elementwise_clamp(&5, &10, &3)                           -> None
/// elementwise_clamp(&vec![0, 30, 21], &vec![1], &vec![20]) -> Some(vec![1, 20, 20])
/// elementwise_clamp(&"zebra", &"apple", &"pear")           -> Some("pear")
/// ```
pub fn elementwise_clamp<T: Elementwise>(target: &T, lo: &T, hi: &T) -> Option<T> {
    T::elementwise_clamp(target, lo, hi)
}

/// Elementwise minimum of two values of the same shape.
///
/// For vectors, an empty operand yields an empty result.
pub fn elementwise_min<T: Elementwise>(a: &T, b: &T) -> Option<T> {
    T::elementwise_min(a, b)
}

/// Elementwise maximum of two values of the same shape.
///
/// For vectors, an empty operand yields a copy of the other operand.
pub fn elementwise_max<T: Elementwise>(a: &T, b: &T) -> Option<T> {
    T::elementwise_max(a, b)
}
