/// Flattening of 4x4 matrices for upload to a render backend
///
/// All matrices in this crate act on column vectors with the translation in the
/// fourth column. `to_row_major` reads them row by row (upload with
/// `transpose = true` in GL); `to_column_major` is nalgebra's storage order
/// (upload with `transpose = false`).
use nalgebra::Matrix4;

pub fn to_row_major(m: &Matrix4<f64>) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = m[(row, col)] as f32;
        }
    }
    out
}

pub fn to_column_major(m: &Matrix4<f64>) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for (dst, src) in out.iter_mut().zip(m.as_slice()) {
        *dst = *src as f32;
    }
    out
}
