/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use meshview_core::{Camera, Drawable, DrawableSource, Mesh, Sphere};
use nalgebra::{Matrix3, Point3, Vector3, Vector4};
use std::convert::Infallible;
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// One flat-shaded triangle ready for rasterization
#[derive(Debug, Clone)]
pub struct Facet {
    pub vertices: [Point3<f64>; 3],
    pub normal: Vector3<f64>,
}

impl Facet {
    fn from_stl(normal: [f32; 3], vertices: [[f32; 3]; 3]) -> Self {
        let vertices = vertices.map(|[x, y, z]| Point3::new(f64::from(x), f64::from(y), f64::from(z)));
        let normal = Vector3::new(f64::from(normal[0]), f64::from(normal[1]), f64::from(normal[2]));
        let normal = normal.try_normalize(1e-12).unwrap_or_else(|| {
            // Plenty of exporters write zero normals; fall back to the winding
            let edge1 = vertices[1] - vertices[0];
            let edge2 = vertices[2] - vertices[0];
            edge1.cross(&edge2).try_normalize(1e-12).unwrap_or_else(Vector3::z)
        });
        Self { vertices, normal }
    }
}

/// Mesh converted for the ASCII rasterizer
#[derive(Debug, Clone)]
pub struct TerminalMesh {
    facets: Vec<Facet>,
    boundary: Sphere,
}

impl TerminalMesh {
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }
}

impl Drawable for TerminalMesh {
    fn bounding_sphere(&self) -> Sphere {
        self.boundary
    }
}

/// Builds [`TerminalMesh`]es for the viewer session
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSource;

impl DrawableSource for TerminalSource {
    type Drawable = TerminalMesh;
    type Error = Infallible;

    fn create_drawable(&mut self, mesh: Mesh) -> Result<TerminalMesh, Infallible> {
        let facets = mesh
            .triangles()
            .map(|(normal, vertices)| Facet::from_stl(normal, vertices))
            .collect();
        Ok(TerminalMesh {
            facets,
            boundary: mesh.bounding_box().bounding_sphere(),
        })
    }
}

/// ASCII renderer that converts 3D meshes to terminal characters.
///
/// Depth follows the camera's convention: larger values are nearer, the
/// buffer starts at negative infinity and keeps the greatest depth.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f64>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f64::NEG_INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f64::NEG_INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    pub fn render_mesh(&mut self, mesh: &TerminalMesh, camera: &Camera) {
        let view_projection = camera.view_projection();
        let view_rotation: Matrix3<f64> = camera.model_view_matrix().fixed_view::<3, 3>(0, 0).into_owned();
        for facet in mesh.facets() {
            self.render_facet(facet, &view_projection, &view_rotation);
        }
    }

    fn render_facet(&mut self, facet: &Facet, view_projection: &nalgebra::Matrix4<f64>, view_rotation: &Matrix3<f64>) {
        let screen = facet.vertices.map(|p| {
            let ndc = view_projection * Vector4::new(p.x, p.y, p.z, 1.0);
            (
                (ndc.x + 1.0) * 0.5 * self.width as f64,
                (1.0 - ndc.y) * 0.5 * self.height as f64,
                ndc.z,
            )
        });

        // Light comes from the viewer; both sides are lit
        let brightness = (view_rotation * facet.normal).z.abs();
        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f64).round() as usize;
        let character = LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)];

        self.rasterize_triangle(&screen, character);
    }

    fn rasterize_triangle(&mut self, coords: &[(f64, f64, f64); 3], character: char) {
        let [v0, v1, v2] = *coords;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor().max(0.0);
        let max_x = v0.0.max(v1.0).max(v2.0).ceil().min(self.width as f64 - 1.0);
        let min_y = v0.1.min(v1.1).min(v2.1).floor().max(0.0);
        let max_y = v0.1.max(v1.1).max(v2.1).ceil().min(self.height as f64 - 1.0);
        if !(min_x <= max_x && min_y <= max_y) {
            return;
        }

        for y in min_y as usize..=max_y as usize {
            for x in min_x as usize..=max_x as usize {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;

                let Some((w0, w1, w2)) = barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py)) else {
                    return;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                if !(-1.0..=1.0).contains(&depth) {
                    continue;
                }
                let idx = y * self.width + x;
                if depth > self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_at(x, y);

                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle.
/// Degenerate (zero-area) triangles have none.
fn barycentric(v0: (f64, f64), v1: (f64, f64), v2: (f64, f64), p: (f64, f64)) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-12 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
