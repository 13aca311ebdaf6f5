pub mod model;

pub use model::Mesh;
