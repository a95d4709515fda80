//! Ordered containers.
//!
//! - [`ds`]: data structures meant for use.
//! - [`naive`]: straightforward counterparts, used as oracles in tests.

#[doc(inline)]
pub use {ds, naive};
