mod floating_shapes;

pub use floating_shapes::FloatingShapes;
