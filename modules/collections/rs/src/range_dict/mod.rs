//! Range-compressed attribute dictionary and composable views over its identifiers.
//!
//! A [`RangeDict`] stores one value per identifier `0..size` for each of a fixed set of keys.
//! Values are kept as runs over contiguous identifiers, so a key where most identifiers share a
//! value costs a handful of runs regardless of the size.
//!
//! Identifiers are selected through [`View`]s. Indexing a view with a [`Selector`] produces a
//! child view; positions always refer to the parent's own sequence:
//!
//! ```
//! use rangedict_collections_rs::range_dict::{RangeDict, Selector};
//!
//! let rd = RangeDict::new(10, [("a", "alpha"), ("b", "bravo")])?;
//! let view = rd.index(Selector::range(2, 7))?;
//! assert_eq!(view.ids(), [2, 3, 4, 5, 6]);
//!
//! let nested = view.index(Selector::range(2, 4))?;
//! assert_eq!(nested.ids(), [4, 5]);
//!
//! nested.set("a", "omega")?;
//! assert_eq!(rd.get("a", 4)?, "omega");
//! # Ok::<(), rangedict_collections_rs::Error>(())
//! ```
pub use dict::RangeDict;
pub use identical::Identical;
pub use rangedict_core_rs::pos::Slice;
pub use runs::{Run, Runs, RunsBuilder};
pub use selector::Selector;
pub use view::View;

mod dict;
mod identical;
mod ranges;
mod runs;
mod selector;
mod view;
