//! Grid and pixel coordinate types.
//!
//! Two coordinate systems, never mixed implicitly:
//!
//! 1. Cell coordinates (`CellPosition`): character positions in the grid,
//!    (0, 0) at the top-left cell. May go negative when the pointer sits
//!    above or left of the grid.
//! 2. Pixel coordinates (`PixelPosition`): positions in the space the event
//!    source reports, offset from the grid's top-left pixel by the surface
//!    origin.

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A character position in the grid: column then row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: i32,
    pub row: i32,
}

impl CellPosition {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Grid size in cells. Immutable after window construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    width: u16,
    height: u16,
}

impl GridDimensions {
    /// Clamps both axes to at least one cell, so the block contract
    /// ("exactly `height` lines of `width` characters") stays satisfiable.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Pixel size of one cell, measured by the display surface from a reference
/// glyph of the configured monospace font. Both axes are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: i32,
    pub height: i32,
}

/// Converts between pixel space and cell space.
///
/// No bounds clamping happens here: a mapped cell may be negative or lie
/// outside the grid, and range validation belongs to the caller. That keeps
/// the integer semantics near the edges exact and testable.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    cell: CellMetrics,
    origin: PixelPosition,
}

impl CoordinateMapper {
    /// # Panics
    ///
    /// Panics if either cell dimension is not positive. Window construction
    /// validates surface metrics first and reports bad ones as a
    /// [`WindowError`](crate::WindowError); callers building a mapper
    /// standalone own the same check.
    pub fn new(cell: CellMetrics, origin: PixelPosition) -> Self {
        assert!(
            cell.width > 0 && cell.height > 0,
            "cell metrics must be positive, got {}x{}",
            cell.width,
            cell.height
        );
        Self { cell, origin }
    }

    /// Pixel position to the cell containing it. Euclidean division, not
    /// truncation: a pointer one pixel above the grid lands in row -1, not
    /// row 0.
    pub fn to_cell(&self, px: PixelPosition) -> CellPosition {
        CellPosition {
            col: (px.x - self.origin.x).div_euclid(self.cell.width),
            row: (px.y - self.origin.y).div_euclid(self.cell.height),
        }
    }

    /// Cell position to its top-left pixel. Used for sizing the surface, not
    /// for re-deriving input, so the origin offset does not participate.
    pub fn to_pixel(&self, cell: CellPosition) -> PixelPosition {
        PixelPosition {
            x: cell.col * self.cell.width,
            y: cell.row * self.cell.height,
        }
    }
}
