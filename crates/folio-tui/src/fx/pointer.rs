//! Pointer micro-interactions.
//!
//! Each is a stateless pure function of the pointer position and a target
//! rect, computed fresh per mouse event. Leaving the target resets the
//! element to neutral, which here just means the functions stop being
//! consulted for it.

use ratatui::layout::Rect;

/// What the pointer is currently over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    NavLink(usize),
    SkillTag { category: usize, tag: usize },
    TimelineItem(usize),
    ProjectCard(usize),
    HeroButton(usize),
    ContactCard,
}

/// Card tilt angles derived from the pointer offset from center.
///
/// The terminal cannot rotate glyphs; the angles drive which border edges
/// get emphasis, approximating the lean of the original 3D tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0 };
}

/// Tilt for a pointer inside `rect`: `((y - cy) / 20, (cx - x) / 20)`.
pub fn card_tilt(pointer: (u16, u16), rect: Rect) -> Tilt {
    if rect.width == 0 || rect.height == 0 {
        return Tilt::NEUTRAL;
    }
    let x = pointer.0 as f32 - rect.x as f32;
    let y = pointer.1 as f32 - rect.y as f32;
    let center_x = rect.width as f32 / 2.0;
    let center_y = rect.height as f32 / 2.0;
    Tilt {
        rotate_x: (y - center_y) / 20.0,
        rotate_y: (center_x - x) / 20.0,
    }
}

/// Magnetic button pull: a tenth of the pointer's offset from center,
/// rounded to whole cells and clamped so labels stay inside their row.
pub fn magnetic_offset(pointer: (u16, u16), rect: Rect) -> (i16, i16) {
    let x = pointer.0 as f32 - rect.x as f32 - rect.width as f32 / 2.0;
    let y = pointer.1 as f32 - rect.y as f32 - rect.height as f32 / 2.0;
    let dx = (x * 0.1).round() as i16;
    let dy = (y * 0.1).round() as i16;
    (dx.clamp(-2, 2), dy.clamp(-1, 1))
}

/// Glow intensity at a cell, radial falloff from the pointer.
///
/// 1.0 at the pointer, 0.0 at `radius` columns away. Rows count double
/// because terminal cells are roughly twice as tall as they are wide.
pub fn glow_intensity(cell: (u16, u16), center: (u16, u16), radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let dx = cell.0 as f32 - center.0 as f32;
    let dy = (cell.1 as f32 - center.1 as f32) * 2.0;
    let distance = (dx * dx + dy * dy).sqrt();
    (1.0 - distance / radius).max(0.0)
}

/// Hit-test the pointer against rects registered during the last draw
pub fn hit_test(pointer: (u16, u16), rects: &[(Rect, HoverTarget)]) -> Option<HoverTarget> {
    let (x, y) = pointer;
    // Later registrations win, matching paint order
    rects
        .iter()
        .rev()
        .find(|(rect, _)| rect.contains(ratatui::layout::Position { x, y }))
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_neutral_at_center() {
        let rect = Rect::new(0, 0, 40, 20);
        let tilt = card_tilt((20, 10), rect);
        assert_eq!(tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_tilt_signs() {
        let rect = Rect::new(0, 0, 40, 20);
        // Pointer above center: rotate_x negative (leans away)
        let above = card_tilt((20, 2), rect);
        assert!(above.rotate_x < 0.0);
        // Pointer left of center: rotate_y positive
        let left = card_tilt((5, 10), rect);
        assert!(left.rotate_y > 0.0);
    }

    #[test]
    fn test_magnetic_scales_by_tenth() {
        let rect = Rect::new(0, 0, 20, 3);
        // 8 columns right of center: 0.8 rounds to 1
        assert_eq!(magnetic_offset((18, 1), rect), (1, 0));
        // Center: no pull
        assert_eq!(magnetic_offset((10, 1), rect), (0, 0));
    }

    #[test]
    fn test_magnetic_clamped() {
        let rect = Rect::new(0, 0, 200, 3);
        let (dx, _) = magnetic_offset((199, 1), rect);
        assert_eq!(dx, 2);
    }

    #[test]
    fn test_glow_falloff() {
        let center = (10, 5);
        assert_eq!(glow_intensity(center, center, 12.0), 1.0);
        let near = glow_intensity((13, 5), center, 12.0);
        let far = glow_intensity((20, 5), center, 12.0);
        assert!(near > far);
        assert_eq!(glow_intensity((40, 5), center, 12.0), 0.0);
    }

    #[test]
    fn test_hit_test_last_wins() {
        let rects = vec![
            (Rect::new(0, 0, 20, 10), HoverTarget::ContactCard),
            (Rect::new(5, 5, 4, 1), HoverTarget::NavLink(1)),
        ];
        assert_eq!(hit_test((6, 5), &rects), Some(HoverTarget::NavLink(1)));
        assert_eq!(hit_test((1, 1), &rects), Some(HoverTarget::ContactCard));
        assert_eq!(hit_test((50, 50), &rects), None);
    }
}
