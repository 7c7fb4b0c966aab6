mod count;
mod hasher;
mod positions;
mod word;

pub use count::*;
pub use hasher::*;
pub use positions::*;
pub use word::*;
