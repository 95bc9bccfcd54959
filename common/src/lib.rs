pub mod types;
pub mod util;
