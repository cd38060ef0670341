mod material;
mod rectangle;
pub mod vector;

pub use material::*;
pub use rectangle::*;
