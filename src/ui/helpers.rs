use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tiles stacked in each column before the grid starts a new column.
pub(crate) const TILE_ROWS: usize = 5;
/// Narrowest tile we are willing to draw; more columns than fit scroll.
pub(crate) const MIN_TILE_WIDTH: u16 = 24;
/// Text drawn in the top-right corner of each tile to delete it.
pub(crate) const DELETE_MARKER: &str = "[x]";

/// Grid cell for the note at `index`: notes fill a column top to bottom and
/// then move one column to the right.
pub(crate) fn tile_position(index: usize) -> (usize, usize) {
    (index % TILE_ROWS, index / TILE_ROWS)
}

/// Number of columns needed to show `count` notes.
pub(crate) fn column_count(count: usize) -> usize {
    count.div_ceil(TILE_ROWS)
}

/// First grid column to draw so that `selected_column` stays in view when
/// only `visible` columns fit on screen.
pub(crate) fn first_visible_column(selected_column: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected_column >= visible {
        selected_column + 1 - visible
    } else {
        0
    }
}

/// How many tile columns of at least `MIN_TILE_WIDTH` fit in `width`.
pub(crate) fn columns_that_fit(width: u16) -> usize {
    (width / MIN_TILE_WIDTH).max(1) as usize
}

/// Split `area` into an evenly sized `rows` x `columns` grid.
pub(crate) fn grid_cells(area: Rect, rows: usize, columns: usize) -> Vec<Vec<Rect>> {
    let rows = rows.max(1) as u32;
    let columns = columns.max(1) as u32;
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows); rows as usize])
        .split(area);

    row_chunks
        .iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns); columns as usize])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Click target for the delete marker drawn on a tile's top border.
pub(crate) fn delete_marker_area(tile: Rect) -> Option<Rect> {
    let width = DELETE_MARKER.len() as u16;
    if tile.width < width + 2 || tile.height == 0 {
        return None;
    }
    Some(Rect {
        x: tile.x + tile.width - width - 1,
        y: tile.y,
        width,
        height: 1,
    })
}

/// Longest suffix of `input` that fits in `max_width` terminal columns,
/// together with its display width. Wide characters count as two columns.
pub(crate) fn input_tail(input: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut start = input.len();
    for (index, ch) in input.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = index;
    }
    let tail = &input[start..];
    (tail, tail.width())
}

/// Shorten `text` to at most `max_chars` characters for status messages.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut short: String = single_line
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect();
    short.push('…');
    short
}
