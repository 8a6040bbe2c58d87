pub mod sphere_renderer;

pub use sphere_renderer::BlochSphereRenderer;
