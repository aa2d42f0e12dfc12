/// End-to-end checks: STL bytes in, model-view and projection matrices out.

use approx::assert_relative_eq;
use meshview_core::{
    matrix, stl, ControlCommand, CpuSource, Mesh, Modifiers, Vector3, ViewerOptions, ViewerSession,
};
use nalgebra::Vector4;

/// Two triangles forming a 4 x 2 rectangle in the z = 0 plane, centered at (1, 1, 0)
fn rectangle_stl() -> Vec<u8> {
    let mut mesh = Mesh::new();
    mesh.push_triangle([0.0, 0.0, 1.0], [[-1.0, 0.0, 0.0], [3.0, 0.0, 0.0], [3.0, 2.0, 0.0]]);
    mesh.push_triangle([0.0, 0.0, 1.0], [[-1.0, 0.0, 0.0], [3.0, 2.0, 0.0], [-1.0, 2.0, 0.0]]);
    stl::encode(&mesh)
}

fn loaded_session() -> ViewerSession<CpuSource> {
    let mut session = ViewerSession::new(CpuSource, ViewerOptions::default()).unwrap();
    session.load_bytes(&rectangle_stl()).unwrap();
    session.resize(200.0, 100.0);
    assert!(session.update());
    session
}

fn to_clip(session: &ViewerSession<CpuSource>, p: Vector3) -> Vector4<f64> {
    session.camera().view_projection() * Vector4::new(p.x, p.y, p.z, 1.0)
}

#[test]
fn test_loaded_mesh_is_framed() {
    let session = loaded_session();
    let sphere = session.bounding_sphere();
    assert_eq!(sphere.center, Vector3::new(1.0, 1.0, 0.0));
    assert_eq!(sphere.radius, 5.0f64.sqrt());

    // Every vertex lands inside the unit cube
    for vertex in session.drawable().mesh().points().chunks_exact(3) {
        let clip = to_clip(&session, Vector3::new(vertex[0].into(), vertex[1].into(), vertex[2].into()));
        assert!(clip.x.abs() <= 1.0 && clip.y.abs() <= 1.0 && clip.z.abs() <= 1.0);
    }

    let center = to_clip(&session, sphere.center);
    assert_relative_eq!(center, Vector4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
}

#[test]
fn test_matrices_export_in_both_layouts() {
    let session = loaded_session();
    let model_view = session.camera().model_view_matrix();

    // Identity rotation, focus at (1, 1, 0): model-view translates by (-1, -1, 0)
    let rows = matrix::to_row_major(model_view);
    assert_eq!((rows[3], rows[7], rows[11]), (-1.0, -1.0, 0.0));
    let cols = matrix::to_column_major(model_view);
    assert_eq!((cols[12], cols[13], cols[14]), (-1.0, -1.0, 0.0));
}

#[test]
fn test_orbit_then_pan_then_zoom() {
    let mut session = loaded_session();
    let sphere = session.bounding_sphere();

    // Rotating keeps the pivot at the center of the view
    session.apply(ControlCommand::Press { x: 100.0, y: 50.0 });
    session.apply(ControlCommand::Move {
        x: 130.0,
        y: 20.0,
        modifiers: Modifiers::NONE,
    });
    session.apply(ControlCommand::Release);
    assert!(session.update());
    let center = to_clip(&session, sphere.center);
    assert_relative_eq!(center.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(center.y, 0.0, epsilon = 1e-12);

    // Panning by a quarter of the height moves the pivot with the pointer
    session.apply(ControlCommand::Press { x: 100.0, y: 50.0 });
    session.apply(ControlCommand::Move {
        x: 100.0,
        y: 75.0,
        modifiers: Modifiers::SHIFT,
    });
    session.apply(ControlCommand::Release);
    assert!(session.update());
    let center = to_clip(&session, sphere.center);
    assert_relative_eq!(center.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(center.y, -0.5, epsilon = 1e-12);

    // Wheel zoom shrinks the half extent
    let before = session.camera().scale;
    session.apply(ControlCommand::Wheel { delta_y: 300.0 });
    assert_eq!(session.camera().scale, before * (1.0 / 1.3));
}

#[test]
fn test_failed_load_keeps_previous_matrices() {
    let mut session = loaded_session();
    let model_view = *session.camera().model_view_matrix();
    let projection = *session.camera().projection_matrix();

    let mut truncated = rectangle_stl();
    truncated.truncate(truncated.len() - 1);
    assert!(session.load_bytes(&truncated).is_err());

    assert!(session.update());
    assert_eq!(*session.camera().model_view_matrix(), model_view);
    assert_eq!(*session.camera().projection_matrix(), projection);
}
