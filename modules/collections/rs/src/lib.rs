pub use ordered_set::OrderedSet;
pub use rangedict_core_rs::{Config, Error, Result};

mod ordered_set;
pub mod range_dict;
