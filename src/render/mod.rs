pub mod webgl;
pub mod shaders;
pub mod geometry;
pub mod pipeline;

pub use webgl::WebGLContext;
pub use pipeline::RenderPipeline;
