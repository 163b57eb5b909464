pub mod center;

pub use center::{ActivePage, Center};
