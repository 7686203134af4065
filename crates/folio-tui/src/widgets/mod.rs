mod hero;
mod nav_bar;
mod overlay;
mod page;
mod sections;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use overlay::OverlayWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;

use ratatui::text::Line;

use crate::fx::pointer::HoverTarget;

/// A composed block: its lines plus hit rects relative to the block top,
/// as `(col, row, width, height, target)`.
pub struct BuiltBlock {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<(u16, u16, u16, u16, HoverTarget)>,
}

impl BuiltBlock {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            hits: Vec::new(),
        }
    }
}
