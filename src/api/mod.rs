pub mod leetcode;
pub mod params;

pub use leetcode::{__path_handle_leetcode, handle_leetcode};
pub use params::{render_options, QueryMapExt};
