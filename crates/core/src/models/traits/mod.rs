mod to_debug_string;

pub use to_debug_string::*;
