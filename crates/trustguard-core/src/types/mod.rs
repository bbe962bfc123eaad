mod authenticity;
mod common;
mod feed;
mod review;
mod trust;

pub use authenticity::*;
pub use common::*;
pub use feed::*;
pub use review::*;
pub use trust::*;
