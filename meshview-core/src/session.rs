/// One viewing session: the installed drawable, its camera and input state
use log::{debug, warn};
use thiserror::Error;

use crate::bounds::Sphere;
use crate::camera::{Camera, Viewport};
use crate::control::{ControlCommand, OrbitControl};
use crate::drawable::{Drawable, DrawableSource};
use crate::error::MeshError;
use crate::geometry::Mesh;
use crate::options::ViewerOptions;
use crate::rotation::Rotation;
use crate::stl;
use crate::transform::RigidTransform;

/// Why a load left the scene untouched
#[derive(Debug, Error)]
pub enum LoadError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("render backend rejected mesh: {0}")]
    Backend(#[source] E),
}

/// Ties the decoder, the camera and the orbit control to a render backend.
///
/// All methods are expected to run on one thread; input commands and frame
/// updates are applied in the order they are received.
pub struct ViewerSession<S: DrawableSource> {
    source: S,
    drawable: S::Drawable,
    camera: Camera,
    control: OrbitControl,
    options: ViewerOptions,
}

impl<S: DrawableSource> ViewerSession<S> {
    /// Start with the placeholder triangle and an unfitted camera
    pub fn new(mut source: S, options: ViewerOptions) -> Result<Self, S::Error> {
        let drawable = source.create_drawable(Mesh::placeholder())?;
        Ok(Self {
            source,
            drawable,
            camera: initial_camera(&options),
            control: OrbitControl::new(options.control.clone()),
            options,
        })
    }

    /// Decode binary STL bytes and install the result
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError<S::Error>> {
        let mesh = stl::decode(bytes).map_err(|e| {
            warn!("rejected mesh: {}", e);
            e
        })?;
        self.install_mesh(mesh)
    }

    /// Replace the current drawable and fit the camera to it.
    ///
    /// On error nothing changes.
    pub fn install_mesh(&mut self, mesh: Mesh) -> Result<(), LoadError<S::Error>> {
        if let Err(e) = mesh.bounding_sphere() {
            warn!("rejected mesh: {}", e);
            return Err(e.into());
        }
        let triangles = mesh.triangle_count();
        let drawable = self.source.create_drawable(mesh).map_err(LoadError::Backend)?;
        self.drawable = drawable;
        self.camera.fit(&self.drawable.bounding_sphere());
        debug!("installed mesh with {} triangles", triangles);
        Ok(())
    }

    /// Recreate the camera and frame the current drawable again
    pub fn reset(&mut self) {
        self.camera = initial_camera(&self.options);
        self.camera.fit(&self.drawable.bounding_sphere());
        self.control.apply(&mut self.camera, ControlCommand::Release);
    }

    pub fn apply(&mut self, command: ControlCommand) {
        self.control.apply(&mut self.camera, command);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.apply(ControlCommand::Resize(Viewport::new(width, height)));
    }

    /// Advance one frame and recompute the camera matrices.
    ///
    /// Returns false when the viewport is degenerate and the matrices were
    /// left as they were.
    pub fn update(&mut self) -> bool {
        if self.options.spin.enabled && !self.control.is_dragging() {
            let step = Rotation::of_axis(self.options.spin.axis(), self.options.spin.radians_per_frame);
            self.camera.focus.rotation = step * self.camera.focus.rotation;
        }
        let viewport = self.control.viewport();
        if viewport.is_degenerate() {
            return false;
        }
        let world = self.drawable.bounding_sphere();
        self.camera.update(&world, viewport);
        true
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn control(&self) -> &OrbitControl {
        &self.control
    }

    pub fn drawable(&self) -> &S::Drawable {
        &self.drawable
    }

    pub fn bounding_sphere(&self) -> Sphere {
        self.drawable.bounding_sphere()
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    pub fn set_spin(&mut self, enabled: bool) {
        self.options.spin.enabled = enabled;
    }
}

fn initial_camera(options: &ViewerOptions) -> Camera {
    Camera::new(RigidTransform::IDENTITY, options.camera.initial_scale)
}
