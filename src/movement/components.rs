//! Movement-related components.

use bevy::prelude::*;

use super::collision::inflate;

/// Spatial footprint of an entity in map space (pixels, y grows downward).
///
/// `hitbox` is the collision box used for movement. `rect` is the visual
/// bounds and is always derived from the hitbox: after any movement the
/// rect is recentred on the hitbox, never the other way around.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub hitbox: Rect,
}

impl Body {
    /// Build a body whose hitbox is `rect` inflated by `(dx, dy)`.
    pub fn new(rect: Rect, hitbox_inflate: (f32, f32)) -> Self {
        Self {
            rect,
            hitbox: inflate(rect, hitbox_inflate.0, hitbox_inflate.1),
        }
    }

    /// Build a body from its visual top-left corner and size.
    pub fn from_top_left(top_left: Vec2, size: Vec2, hitbox_inflate: (f32, f32)) -> Self {
        Self::new(Rect::from_corners(top_left, top_left + size), hitbox_inflate)
    }

    /// Logical position of the entity.
    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Recentre the visual rect on the collision box.
    pub fn sync_rect(&mut self) {
        self.rect = Rect::from_center_size(self.hitbox.center(), self.rect.size());
    }
}

/// Desired movement direction. Each axis is independently zero or not;
/// the length is ignored because movement normalises it.
#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct Heading(pub Vec2);

/// Marker for static geometry that blocks movement.
#[derive(Component, Debug, Default)]
pub struct Obstacle;
