//! Axis-separated movement and collision resolution.

use bevy::prelude::*;

use super::components::Body;

/// Strict axis-aligned overlap. Rectangles that only share an edge do not
/// overlap, so a box snapped flush against a wall is free to slide along it.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Grow (or shrink, for negative values) a rect around its centre by
/// `dx` in total width and `dy` in total height.
pub fn inflate(rect: Rect, dx: f32, dy: f32) -> Rect {
    let size = (rect.size() + Vec2::new(dx, dy)).max(Vec2::ZERO);
    Rect::from_center_size(rect.center(), size)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn translate(rect: &mut Rect, offset: Vec2) {
    rect.min += offset;
    rect.max += offset;
}

/// Push `hitbox` out of every obstacle it overlaps, back against the
/// direction it travelled along `axis`.
fn resolve(hitbox: &mut Rect, axis: Axis, velocity: f32, obstacles: &[Rect]) {
    if velocity == 0.0 {
        return;
    }

    for obstacle in obstacles {
        if !overlaps(hitbox, obstacle) {
            continue;
        }

        match axis {
            Axis::Horizontal => {
                let width = hitbox.width();
                if velocity > 0.0 {
                    hitbox.max.x = obstacle.min.x;
                    hitbox.min.x = hitbox.max.x - width;
                } else {
                    hitbox.min.x = obstacle.max.x;
                    hitbox.max.x = hitbox.min.x + width;
                }
            }
            Axis::Vertical => {
                let height = hitbox.height();
                if velocity > 0.0 {
                    hitbox.max.y = obstacle.min.y;
                    hitbox.min.y = hitbox.max.y - height;
                } else {
                    hitbox.min.y = obstacle.max.y;
                    hitbox.max.y = hitbox.min.y + height;
                }
            }
        }
    }
}

/// Move a body `distance` pixels along `heading`.
///
/// The heading is normalised first, so diagonal movement is not faster.
/// X is applied and resolved, then Y. Resolving each axis on its own keeps
/// the box from clipping through the corner between two adjacent
/// obstacles. The visual rect is recentred on the hitbox afterwards.
pub fn move_body(body: &mut Body, heading: Vec2, distance: f32, obstacles: &[Rect]) {
    let direction = heading.normalize_or_zero();

    let dx = direction.x * distance;
    translate(&mut body.hitbox, Vec2::new(dx, 0.0));
    resolve(&mut body.hitbox, Axis::Horizontal, dx, obstacles);

    let dy = direction.y * distance;
    translate(&mut body.hitbox, Vec2::new(0.0, dy));
    resolve(&mut body.hitbox, Axis::Vertical, dy, obstacles);

    body.sync_rect();
}
