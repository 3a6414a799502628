//! Coarse viewport culling of projected faces.

use crate::math::ScreenPoint;
use crate::projection::Projection;

/// How aggressively faces outside the viewport are dropped.
///
/// Selectable from the command line as `none`, `any-vertex` or `bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FaceCulling {
    /// Draw everything that survives clipping.
    None,
    /// Keep a face when at least one vertex projects inside the viewport.
    AnyVertex,
    /// Keep a face when its screen bounding box overlaps the viewport.
    /// Accepts everything `AnyVertex` does, plus faces that span the whole
    /// view with every corner off screen.
    #[default]
    Bounds,
}

impl std::fmt::Display for FaceCulling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceCulling::None => write!(f, "none"),
            FaceCulling::AnyVertex => write!(f, "any-vertex"),
            FaceCulling::Bounds => write!(f, "bounds"),
        }
    }
}

impl FaceCulling {
    /// Whether a projected face should be kept.
    ///
    /// Every point must come from a vertex in front of the camera; clipping
    /// guarantees this before culling runs.
    pub fn is_visible(self, points: &[ScreenPoint], projection: &Projection) -> bool {
        match self {
            FaceCulling::None => true,
            FaceCulling::AnyVertex => any_vertex_on_screen(points, projection),
            FaceCulling::Bounds => bounds_overlap_screen(points, projection),
        }
    }
}

pub fn any_vertex_on_screen(points: &[ScreenPoint], projection: &Projection) -> bool {
    points.iter().any(|&p| projection.contains(p))
}

pub fn bounds_overlap_screen(points: &[ScreenPoint], projection: &Projection) -> bool {
    let Some(first) = points.first() else {
        return false;
    };
    let (mut min, mut max) = (*first, *first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    max.x > 0
        && min.x < projection.width() as i32
        && max.y > 0
        && min.y < projection.height() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> Projection {
        Projection::from_degrees(100, 100, 60.0)
    }

    fn pts(raw: &[(i32, i32)]) -> Vec<ScreenPoint> {
        raw.iter().map(|&(x, y)| ScreenPoint::new(x, y)).collect()
    }

    #[test]
    fn cli_names_match_display() {
        use clap::ValueEnum;

        for policy in FaceCulling::value_variants() {
            let parsed = FaceCulling::from_str(&policy.to_string(), false).unwrap();
            assert_eq!(parsed, *policy);
        }
        assert_eq!(FaceCulling::from_str("any-vertex", false), Ok(FaceCulling::AnyVertex));
    }

    #[test]
    fn one_visible_corner_is_enough() {
        let face = pts(&[(-50, -50), (50, 50), (500, 500)]);
        assert!(any_vertex_on_screen(&face, &projection()));
        assert!(bounds_overlap_screen(&face, &projection()));
    }

    #[test]
    fn face_entirely_off_to_one_side_is_dropped() {
        let face = pts(&[(150, 10), (200, 10), (200, 90)]);
        assert!(!FaceCulling::AnyVertex.is_visible(&face, &projection()));
        assert!(!FaceCulling::Bounds.is_visible(&face, &projection()));
        assert!(FaceCulling::None.is_visible(&face, &projection()));
    }

    #[test]
    fn bounds_keeps_faces_covering_the_view() {
        let face = pts(&[(-100, -100), (200, -100), (200, 200), (-100, 200)]);
        assert!(!any_vertex_on_screen(&face, &projection()));
        assert!(bounds_overlap_screen(&face, &projection()));
    }
}
