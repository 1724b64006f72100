//! Collision resolution against static platforms
//!
//! Movement is resolved one axis at a time: integrate X, push out along X,
//! then integrate Y, push out along Y. The side a platform was hit from is
//! decided by where the mover was *before* the move, so a box can never be
//! pushed through a platform it was already beside.

use super::rect::{Rect, overlaps};
use super::state::Platform;

/// Which surface stopped a vertical move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Nothing hit
    None,
    /// Landed on top of a platform
    Floor,
    /// Bumped the underside of a platform
    Ceiling,
}

/// Push `rect` out of every platform it overlaps after a horizontal move.
///
/// `old` is the rectangle before the move. Returns true if any platform
/// blocked the move.
pub fn resolve_x(rect: &mut Rect, old: &Rect, platforms: &[Platform], epsilon: f32) -> bool {
    let mut blocked = false;
    for platform in platforms {
        let p = &platform.rect;
        if !overlaps(rect, p) {
            continue;
        }
        if old.right() <= p.x {
            // Came from the left
            rect.x = p.x - rect.w - epsilon;
            blocked = true;
        } else if old.x >= p.right() {
            // Came from the right
            rect.x = p.right() + epsilon;
            blocked = true;
        }
    }
    blocked
}

/// Push `rect` out of every platform it overlaps after a vertical move.
///
/// `old` is the rectangle before either axis moved. A floor contact wins
/// over a ceiling contact if both happen in the same frame.
pub fn resolve_y(
    rect: &mut Rect,
    old: &Rect,
    platforms: &[Platform],
    epsilon: f32,
) -> VerticalContact {
    let mut contact = VerticalContact::None;
    for platform in platforms {
        let p = &platform.rect;
        if !overlaps(rect, p) {
            continue;
        }
        if old.bottom() <= p.y {
            rect.y = p.y - rect.h - epsilon;
            contact = VerticalContact::Floor;
        } else if old.y >= p.bottom() {
            rect.y = p.bottom() + epsilon;
            if contact == VerticalContact::None {
                contact = VerticalContact::Ceiling;
            }
        }
    }
    contact
}

/// Keep `rect` inside `[0, width]` horizontally
pub fn clamp_to_width(rect: &mut Rect, width: f32) {
    if rect.x < 0.0 {
        rect.x = 0.0;
    }
    if rect.right() > width {
        rect.x = width - rect.w;
    }
}
