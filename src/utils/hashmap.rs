//! Hash-maps keyed by exact floating-point positions.

use crate::math::{Point, Real};

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Bit-exact key of a point, usable in a hash-map.
///
/// Two points map to the same key iff. their coordinates compare equal with `==`
/// (`-0.0` and `0.0` are merged). NaN coordinates never compare equal to anything
/// but are still given a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointKey([u64; 3]);

impl PointKey {
    /// The key of the point `pt`.
    #[inline]
    pub fn new(pt: &Point<Real>) -> Self {
        // Adding zero turns `-0.0` into `0.0`.
        let bits = |x: Real| (x + 0.0).to_bits() as u64;
        Self([bits(pt.x), bits(pt.y), bits(pt.z)])
    }
}
