pub mod courses;
pub mod predict;
pub mod serve;
pub mod subjects;

pub use courses::courses;
pub use predict::predict;
pub use serve::serve;
pub use subjects::subjects;
