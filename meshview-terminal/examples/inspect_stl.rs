/// Example: Decode an STL file and print how the viewer would frame it
///
/// Usage: cargo run --example inspect_stl -- path/to/file.stl [width height]
use meshview_core::{matrix, stl, Camera, RigidTransform, Viewport};
use std::env;
use std::fs;
use std::io;

fn print_matrix(label: &str, values: [f32; 16]) {
    println!("{}:", label);
    for row in values.chunks(4) {
        println!("  {:>10.4} {:>10.4} {:>10.4} {:>10.4}", row[0], row[1], row[2], row[3]);
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <stl-file> [width height]", args[0]);
        return Ok(());
    }

    let width = args.get(2).and_then(|w| w.parse().ok()).unwrap_or(800.0);
    let height = args.get(3).and_then(|h| h.parse().ok()).unwrap_or(600.0);

    let data = fs::read(&args[1])?;
    let mesh = stl::decode(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let sphere = mesh
        .bounding_sphere()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let bounds = mesh.bounding_box();

    println!("{} triangles, {} vertices", mesh.triangle_count(), mesh.vertex_count());
    println!(
        "box: x [{}, {}]  y [{}, {}]  z [{}, {}]",
        bounds.x.lower, bounds.x.upper, bounds.y.lower, bounds.y.upper, bounds.z.lower, bounds.z.upper
    );
    println!("sphere: center {:?}, radius {}", sphere.center, sphere.radius);

    let mut camera = Camera::new(RigidTransform::IDENTITY, 1.0);
    camera.fit(&sphere);
    camera.update(&sphere, Viewport::new(width, height));

    print_matrix("model-view (row-major)", matrix::to_row_major(camera.model_view_matrix()));
    print_matrix("projection (row-major)", matrix::to_row_major(camera.projection_matrix()));
    Ok(())
}
