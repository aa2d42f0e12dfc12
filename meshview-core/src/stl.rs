/// Binary STL decoder
use log::debug;
use nom::{
    bytes::complete::take,
    number::complete::{le_f32, le_u32},
    sequence::tuple,
    IResult,
};

use crate::error::MeshError;
use crate::geometry::Mesh;

pub const HEADER_LEN: usize = 80;
/// Header plus the triangle count
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;
/// Normal, three vertices, attribute byte count
pub const RECORD_LEN: usize = 50;

/// Total byte length a file announcing `triangle_count` triangles must have
pub fn required_len(triangle_count: u32) -> u64 {
    PREAMBLE_LEN as u64 + u64::from(triangle_count) * RECORD_LEN as u64
}

/// Decode a binary STL buffer into flat position/normal arrays.
///
/// The whole buffer is validated against the triangle count before any record
/// is read, so a failed decode never yields a partial mesh. Bytes after the
/// last record are ignored.
pub fn decode(data: &[u8]) -> Result<Mesh, MeshError> {
    let actual = data.len() as u64;
    let (body, triangle_count) = preamble(data).map_err(|_| MeshError::MalformedMesh {
        expected: PREAMBLE_LEN as u64,
        actual,
    })?;

    let expected = required_len(triangle_count);
    if expected > actual {
        return Err(MeshError::MalformedMesh { expected, actual });
    }

    let mut mesh = Mesh::with_capacity(triangle_count as usize);
    let mut input = body;
    for _ in 0..triangle_count {
        let (rest, (normal, vertices)) =
            record(input).map_err(|_| MeshError::MalformedMesh { expected, actual })?;
        mesh.push_triangle(normal, vertices);
        input = rest;
    }

    debug!("decoded binary STL: {} triangles, {} bytes", triangle_count, actual);
    Ok(mesh)
}

fn preamble(input: &[u8]) -> IResult<&[u8], u32> {
    let (input, _header) = take(HEADER_LEN)(input)?;
    le_u32(input)
}

fn vec3(input: &[u8]) -> IResult<&[u8], [f32; 3]> {
    let (input, (x, y, z)) = tuple((le_f32, le_f32, le_f32))(input)?;
    Ok((input, [x, y, z]))
}

fn record(input: &[u8]) -> IResult<&[u8], ([f32; 3], [[f32; 3]; 3])> {
    let (input, (normal, v0, v1, v2)) = tuple((vec3, vec3, vec3, vec3))(input)?;
    // Attribute byte count, unused
    let (input, _) = take(2usize)(input)?;
    Ok((input, (normal, [v0, v1, v2])))
}

/// Encode a mesh back into binary STL with a zeroed header
pub fn encode(mesh: &Mesh) -> Vec<u8> {
    let count = mesh.triangle_count();
    let mut out = Vec::with_capacity(PREAMBLE_LEN + count * RECORD_LEN);
    out.resize(HEADER_LEN, 0);
    out.extend_from_slice(&(count as u32).to_le_bytes());
    for (normal, vertices) in mesh.triangles() {
        for value in normal.iter().chain(vertices.iter().flatten()) {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.extend_from_slice(&[0, 0]);
    }
    out
}
