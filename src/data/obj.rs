use crate::math::Vec4;
use crate::mesh::Mesh;
use super::error::{LoadError, LoadResult};

/// Parse the minimal OBJ subset the viewer understands.
///
/// `v x y z` adds a vertex, `f a b c` adds a triangle with 1-based vertex
/// indices (for `a/t/n` references only `a` is read). Lines starting
/// with any other token are skipped.
pub fn parse_obj(source: &str) -> LoadResult<Mesh> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (i, line) in source.lines().enumerate() {
        let line_no = i + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => vertices.push(parse_vertex(tokens, line_no)?),
            Some("f") => faces.push((line_no, parse_face(tokens, line_no)?)),
            _ => {}
        }
    }

    let vertex_count = vertices.len();
    let mut triangles = Vec::with_capacity(faces.len());
    for (line, face) in faces {
        let mut triangle = [0u32; 3];
        for (slot, &index) in triangle.iter_mut().zip(face.iter()) {
            if index < 1 || index as usize > vertex_count {
                return Err(LoadError::FaceIndex {
                    line,
                    index,
                    vertex_count,
                });
            }
            *slot = (index - 1) as u32;
        }
        triangles.push(triangle);
    }

    Mesh::new(vertices, triangles)
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> LoadResult<Vec4> {
    let mut coords = [0.0f32; 3];
    for coord in coords.iter_mut() {
        let token = tokens.next().ok_or_else(|| LoadError::Mesh {
            line,
            message: "vertex needs three coordinates".to_string(),
        })?;
        *coord = token.parse().map_err(|_| LoadError::Mesh {
            line,
            message: format!("invalid coordinate {:?}", token),
        })?;
    }
    Ok(Vec4::new(coords[0], coords[1], coords[2], 1.0))
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>, line: usize) -> LoadResult<[i64; 3]> {
    let indices = tokens
        .map(|token| {
            let vertex = token.split('/').next().unwrap_or(token);
            vertex.parse::<i64>().map_err(|_| LoadError::Mesh {
                line,
                message: format!("invalid vertex index {:?}", token),
            })
        })
        .collect::<LoadResult<Vec<_>>>()?;

    match indices.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        other => Err(LoadError::Mesh {
            line,
            message: format!("faces must be triangles, found {} indices", other.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2]]);

        let center = mesh.center();
        assert!((center.x - 1.0 / 3.0).abs() < 0.001);
        assert!((center.y - 1.0 / 3.0).abs() < 0.001);
        assert_eq!(center.z, 0.0);
        assert_eq!(center.w, 1.0);
    }

    #[test]
    fn test_other_lines_ignored() {
        let src = "# a comment\no plane\nv 0 0 0\nvn 0 0 1\nvt 0.5 0.5\nv 1 0 0\ns off\nv 0 1 0\nf 3/1/1 1/2/1 2/3/1\n";
        let mesh = parse_obj(src).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles(), &[[2, 0, 1]]);
    }

    #[test]
    fn test_face_index_out_of_range() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, LoadError::FaceIndex { line: 3, index: 3, vertex_count: 2 }));
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::FaceIndex { index: 0, .. }));
    }

    #[test]
    fn test_quad_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap_err();
        assert!(err.to_string().contains("triangles"));
    }

    #[test]
    fn test_bad_vertex() {
        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Mesh { line: 1, .. }));
    }

    #[test]
    fn test_empty_mesh() {
        assert!(matches!(parse_obj("# nothing\n"), Err(LoadError::EmptyMesh)));
    }
}
