//! Ray picking against slices and the volume cube.
//!
//! Every click scans all primitives once, O(n) in the number of primitives. A
//! scene this small has four, so there is no spatial index.

use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::scene::PrimitiveId;

/// Hit geometry in the primitive's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    /// Rectangle in the local XY plane.
    Rect { half_size: Vec2 },
    /// Box centered at the local origin.
    Cuboid { half_size: Vec3 },
}

impl PickShape {
    /// Distance along `ray` to the first hit in front of its origin.
    pub fn hit_distance(&self, ray: Ray3d, transform: &GlobalTransform) -> Option<f32> {
        let to_local = transform.affine().inverse();
        let origin = to_local.transform_point3(ray.origin);
        let dir = to_local.transform_vector3(*ray.direction);
        match *self {
            PickShape::Rect { half_size } => ray_rect_intersect(origin, dir, half_size),
            PickShape::Cuboid { half_size } => {
                ray_aabb_intersect(origin, dir, -half_size, half_size)
            }
        }
    }
}

fn ray_rect_intersect(origin: Vec3, dir: Vec3, half_size: Vec2) -> Option<f32> {
    if dir.z.abs() <= f32::EPSILON {
        return None;
    }
    let t = -origin.z / dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = origin + dir * t;
    (hit.x.abs() <= half_size.x && hit.y.abs() <= half_size.y).then_some(t)
}

fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

/// Maps a cursor position (origin top-left, y down) to normalized device
/// coordinates in [-1, 1] with y up.
pub fn normalize_pointer(cursor: Vec2, canvas_size: Vec2) -> Option<Vec2> {
    if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / canvas_size.x * 2.0 - 1.0,
        -(cursor.y / canvas_size.y) * 2.0 + 1.0,
    ))
}

/// Ray from the near plane through `ndc`. Bevy's perspective projection is
/// reverse-z, so the near plane sits at depth 1.
pub fn ray_from_ndc(
    clip_from_view: Mat4,
    camera_transform: &GlobalTransform,
    ndc: Vec2,
) -> Option<Ray3d> {
    let world_from_clip = camera_transform.compute_matrix() * clip_from_view.inverse();
    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let far = world_from_clip.project_point3(ndc.extend(f32::EPSILON));
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d {
        origin: near,
        direction,
    })
}

/// Nearest hit among `candidates`. On equal distance the first candidate wins.
pub fn pick_nearest<'a>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (PrimitiveId, PickShape, &'a GlobalTransform)>,
) -> Option<PrimitiveId> {
    let mut best_hit: Option<(PrimitiveId, f32)> = None;
    for (id, shape, transform) in candidates {
        if let Some(dist) = shape.hit_distance(ray, transform) {
            if best_hit.is_none_or(|(_, d)| dist < d) {
                best_hit = Some((id, dist));
            }
        }
    }
    best_hit.map(|(id, _)| id)
}
