use crate::math::{Mat4, Vec3};

/// Look-at view matrix.
///
/// `forward` points from the eye to the target, `right` is the unit
/// `forward x up`, and the up vector is rebuilt as `right x forward`, so
/// `up` does not have to be perpendicular to the line of sight. The result is
/// `translation(-eye) * basis(right, up, forward) * z_flip`: move the eye
/// to the origin, project onto the camera axes, then mirror z so the
/// camera looks down -z as OpenGL expects. Row-vector convention, see
/// [`Mat4`].
pub fn build_view_matrix(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let forward = (target - eye).normalize();
    let right = forward.cross(&up.normalize()).normalize();
    let true_up = right.cross(&forward);

    Mat4::translation(-eye.x, -eye.y, -eye.z)
        .mul(&Mat4::basis(right, true_up, forward))
        .mul(&Mat4::z_flip())
}
