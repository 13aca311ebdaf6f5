use crate::math::Vec4;
use super::error::{LoadError, LoadResult};

/// Parse a control point file: one `x y z` triple per line.
///
/// Blank lines are skipped; every point gets `w = 1`.
pub fn parse_control_points(source: &str) -> LoadResult<Vec<Vec4>> {
    let mut points = Vec::new();

    for (i, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let coords: Vec<f32> = trimmed
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| LoadError::ControlPoint {
                line: i + 1,
                found: trimmed.to_string(),
            })?;

        match coords.as_slice() {
            &[x, y, z] => points.push(Vec4::new(x, y, z, 1.0)),
            _ => {
                return Err(LoadError::ControlPoint {
                    line: i + 1,
                    found: trimmed.to_string(),
                })
            }
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let points = parse_control_points("0 0 0\n1.5 -2 3e1\n\n  4\t5 6  \n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Vec4::new(1.5, -2.0, 30.0, 1.0));
        assert_eq!(points[2], Vec4::new(4.0, 5.0, 6.0, 1.0));
    }

    #[test]
    fn test_every_point_is_homogeneous() {
        let points = parse_control_points("1 2 3\n4 5 6\n").unwrap();
        assert!(points.iter().all(|p| p.w == 1.0));
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_control_points("").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_control_points("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(err, LoadError::ControlPoint { line: 2, .. }));
    }

    #[test]
    fn test_not_a_number() {
        let err = parse_control_points("1 two 3\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
