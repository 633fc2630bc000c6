//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::Shape;
use super::vertex::Vertex;
use crate::sim::Aabb;

/// Segments used for collectible circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangulate a draw list, preserving order
pub fn tessellate(shapes: &[Shape]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Rect { rect: r, color } => vertices.extend(rect(r, *color)),
            Shape::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Aabb::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for corner in [[10.0, 20.0], [40.0, 20.0], [10.0, 60.0], [40.0, 60.0]] {
            assert!(verts.iter().any(|v| v.position == corner), "{:?}", corner);
        }
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let verts = circle(center, 15.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_tessellate_counts() {
        let shapes = [
            Shape::Rect {
                rect: Aabb::new(0.0, 0.0, 1.0, 1.0),
                color: [1.0; 4],
            },
            Shape::Circle {
                center: Vec2::ZERO,
                radius: 1.0,
                color: [1.0; 4],
            },
        ];
        let verts = tessellate(&shapes);
        assert_eq!(verts.len(), 6 + (CIRCLE_SEGMENTS * 3) as usize);
    }
}
