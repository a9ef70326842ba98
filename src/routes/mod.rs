mod assets;
mod index;
mod map;
mod not_found;

pub use assets::serve_static;
pub use index::index;
pub use map::{map, MISSING_API_KEY};
pub use not_found::not_found;
