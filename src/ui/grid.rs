/// Thumbnail grid layout
///
/// Pure functions: the same item count and viewport always give the same
/// placement, so the grid can be recomputed on every resize or mutation.

/// Row/column of one item, plus its pixel origin inside the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Cells per row, always at least 1
    pub columns: usize,
    /// Left inset that centers the grid in the viewport
    pub left_padding: u32,
    /// One entry per item, in collection order
    pub positions: Vec<CellPosition>,
    /// Bounding box of the placed cells (margins included)
    pub content_width: u32,
    pub content_height: u32,
}

impl GridLayout {
    pub fn rows(&self) -> usize {
        self.positions.last().map_or(0, |p| p.row + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Nothing to place; the UI shows a placeholder instead
    Empty,
    Grid(GridLayout),
}

impl Layout {
    pub fn content_size(&self) -> (u32, u32) {
        match self {
            Layout::Empty => (0, 0),
            Layout::Grid(grid) => (grid.content_width, grid.content_height),
        }
    }
}

/// Place `item_count` square cells row-major in a viewport `viewport_width` wide.
///
/// `columns = max(1, viewport_width / (cell_size + cell_margin))`; the grid
/// is centered by splitting the leftover width evenly on both sides.
pub fn layout(item_count: usize, viewport_width: u32, cell_size: u32, cell_margin: u32) -> Layout {
    if item_count == 0 {
        return Layout::Empty;
    }

    let pitch = cell_size.saturating_add(cell_margin).max(1);
    let columns = ((viewport_width / pitch) as usize).max(1);

    let grid_width = (columns as u32).saturating_mul(pitch);
    let left_padding = viewport_width.saturating_sub(grid_width) / 2;
    let half_margin = cell_margin / 2;

    let positions = (0..item_count)
        .map(|i| {
            let row = i / columns;
            let col = i % columns;
            CellPosition {
                row,
                col,
                x: left_padding
                    .saturating_add((col as u32).saturating_mul(pitch))
                    .saturating_add(half_margin),
                y: (row as u32).saturating_mul(pitch).saturating_add(half_margin),
            }
        })
        .collect();

    let used_columns = item_count.min(columns) as u32;
    let rows = item_count.div_ceil(columns) as u32;

    Layout::Grid(GridLayout {
        columns,
        left_padding,
        positions,
        content_width: used_columns.saturating_mul(pitch),
        content_height: rows.saturating_mul(pitch),
    })
}

/// True when content taller than the viewport needs a vertical scrollbar
pub fn needs_vertical_scroll(content_height: u32, viewport_height: u32) -> bool {
    content_height > viewport_height
}

/// True when content wider than the viewport needs a horizontal scrollbar
pub fn needs_horizontal_scroll(content_width: u32, viewport_width: u32) -> bool {
    content_width > viewport_width
}

/// Which scrollbars the gallery should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAffordance {
    pub vertical: bool,
    pub horizontal: bool,
}

impl ScrollAffordance {
    pub fn for_layout(layout: &Layout, viewport_width: u32, viewport_height: u32) -> Self {
        let (content_width, content_height) = layout.content_size();
        Self {
            vertical: needs_vertical_scroll(content_height, viewport_height),
            horizontal: needs_horizontal_scroll(content_width, viewport_width),
        }
    }

    pub fn any(&self) -> bool {
        self.vertical || self.horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwrap_grid(layout: Layout) -> GridLayout {
        match layout {
            Layout::Grid(grid) => grid,
            Layout::Empty => panic!("expected a grid"),
        }
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(layout(0, 800, 120, 20), Layout::Empty);
        assert_eq!(Layout::Empty.content_size(), (0, 0));
    }

    #[test]
    fn test_row_major_placement() {
        // 3 * 140 = 420 fits in 430, 4 columns would not
        let grid = unwrap_grid(layout(7, 430, 120, 20));
        assert_eq!(grid.columns, 3);

        let cells: Vec<_> = grid.positions.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0)]
        );
        assert_eq!(grid.rows(), 3);
    }

    #[test]
    fn test_at_least_one_column() {
        for width in [0, 1, 50, 139] {
            let grid = unwrap_grid(layout(3, width, 120, 20));
            assert_eq!(grid.columns, 1, "width {}", width);
            assert_eq!(grid.left_padding, 0);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(layout(11, 777, 120, 20), layout(11, 777, 120, 20));
    }

    #[test]
    fn test_grid_is_centered() {
        // 5 columns * 140 = 700, leftover 100 split evenly
        let grid = unwrap_grid(layout(2, 800, 120, 20));
        assert_eq!(grid.columns, 5);
        assert_eq!(grid.left_padding, 50);
        assert_eq!(grid.positions[0].x, 60);
        assert_eq!(grid.positions[1].x, 200);
        assert_eq!(grid.positions[1].y, 10);
    }

    #[test]
    fn test_content_box() {
        let grid = unwrap_grid(layout(7, 430, 120, 20));
        assert_eq!(grid.content_width, 420);
        assert_eq!(grid.content_height, 420);

        // Fewer items than columns: only the used columns count
        let grid = unwrap_grid(layout(2, 800, 120, 20));
        assert_eq!(grid.content_width, 280);
        assert_eq!(grid.content_height, 140);
    }

    #[test]
    fn test_zero_pitch_does_not_divide_by_zero() {
        let grid = unwrap_grid(layout(4, 10, 0, 0));
        assert_eq!(grid.columns, 10);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!needs_vertical_scroll(400, 400));
        assert!(needs_vertical_scroll(401, 400));
        assert!(!needs_horizontal_scroll(0, 0));
        assert!(needs_horizontal_scroll(140, 100));
    }

    #[test]
    fn test_scroll_affordance_for_layout() {
        let layout_result = layout(7, 430, 120, 20);
        let scroll = ScrollAffordance::for_layout(&layout_result, 430, 300);
        assert_eq!(scroll, ScrollAffordance { vertical: true, horizontal: false });
        assert_eq!(ScrollAffordance::for_layout(&layout_result, 430, 300), scroll);

        // A single column wider than the viewport scrolls sideways
        let narrow = layout(1, 80, 120, 20);
        let scroll = ScrollAffordance::for_layout(&narrow, 80, 600);
        assert!(scroll.horizontal && !scroll.vertical);

        assert!(!ScrollAffordance::for_layout(&Layout::Empty, 10, 10).any());
    }

    #[test]
    fn test_huge_cells_do_not_overflow() {
        let grid = unwrap_grid(layout(3, 100, u32::MAX, 1));
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.content_width, u32::MAX);
        assert_eq!(grid.content_height, u32::MAX);
        assert_eq!(grid.positions[2].y, u32::MAX);
        assert!(needs_horizontal_scroll(grid.content_width, 100));
    }
}
