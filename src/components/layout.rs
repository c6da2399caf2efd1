//! Layout calculations for the page

use crate::model::ui::Section;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this get the collapsed navigation menu
pub const COMPACT_WIDTH: u16 = 100;

pub fn is_compact(width: u16) -> bool {
    width < COMPACT_WIDTH
}

/// Page layout areas
pub struct PageLayout {
    pub header: Rect,
    pub menu: Option<Rect>,
    /// Visible sections in page order, starting at the scroll position
    pub sections: Vec<(Section, Rect)>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Preferred height of a section
pub fn section_height(section: Section, compact: bool) -> u16 {
    match (section, compact) {
        (Section::Hero, _) => 10,
        (Section::Solutions, false) => 21,
        (Section::Solutions, true) => 32,
        (Section::Showcase, _) => 10,
        (Section::Feedback, _) => 12,
        (Section::Footer, _) => 6,
    }
}

/// Calculate the page layout
///
/// `menu_rows` is the number of entries in the open compact menu, if any.
/// Sections are stacked from `first` downwards; the last one that starts
/// on screen gets whatever height is left.
pub fn calculate_page_layout(
    area: Rect,
    first: Section,
    compact: bool,
    menu_rows: Option<u16>,
) -> PageLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if let Some(rows) = menu_rows {
        constraints.push(Constraint::Length(rows + 2));
    }
    constraints.extend([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (menu, body, status, help) = if menu_rows.is_some() {
        (Some(chunks[1]), chunks[2], chunks[3], chunks[4])
    } else {
        (None, chunks[1], chunks[2], chunks[3])
    };

    let mut sections = Vec::new();
    let mut y = body.y;
    for section in Section::all().into_iter().skip(first.index()) {
        if y >= body.bottom() {
            break;
        }
        let height = section_height(section, compact).min(body.bottom() - y);
        sections.push((section, Rect::new(body.x, y, body.width, height)));
        y += height;
    }

    PageLayout {
        header: chunks[0],
        menu,
        sections,
        status,
        help,
    }
}
