/// meshview core library - scene geometry and camera math
///
/// Decodes binary STL meshes, bounds them, and drives an orthographic orbit
/// camera from pointer and wheel input. Rendering, file access and event
/// plumbing live in the front-end crates.

pub mod bounds;
pub mod camera;
pub mod control;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod options;
pub mod projection;
pub mod rotation;
pub mod session;
pub mod stl;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use bounds::{Box3, Interval, Sphere};
pub use camera::{Camera, Viewport};
pub use control::{ControlCommand, Gesture, Modifiers, OrbitControl};
pub use drawable::{CpuSource, Drawable, DrawableSource, MeshDrawable};
pub use error::{MeshError, OptionsError};
pub use geometry::Mesh;
pub use options::ViewerOptions;
pub use rotation::{Quaternion, Rotation};
pub use session::{LoadError, ViewerSession};
pub use transform::RigidTransform;
pub use vector::Vector3;
