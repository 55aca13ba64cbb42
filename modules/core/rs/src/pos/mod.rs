pub use position::{resolve, resolve_all};
pub use slice::Slice;

mod position;
mod slice;
