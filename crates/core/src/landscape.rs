//! Landscape module - settled cells of the Tetris scene
//!
//! The landscape maps every row (0 = ceiling .. height-1 = floor) to the set of
//! occupied columns in that row. Each row is stored as a `u64` column mask, so a
//! column can never appear twice in a row and merging is naturally idempotent.
//! Coordinates outside the scene are treated as empty and are never stored.

use crate::types::Position;

/// Scene bounds shared by the landscape and the legality oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scene {
    width: u8,
    height: u8,
}

impl Scene {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Rightmost column index
    pub fn max_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Floor row index
    pub fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }

    /// True when `pos` lies in `[0, max_x] x [0, max_y]`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x <= self.max_x() && pos.y >= 0 && pos.y <= self.max_y()
    }

    /// Mask with one bit per column
    pub fn full_row_mask(&self) -> u64 {
        full_mask(self.width)
    }
}

pub(crate) fn full_mask(width: u8) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Settled cells, one column mask per row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Landscape {
    scene: Scene,
    rows: Vec<u64>,
}

impl Landscape {
    /// Create an empty landscape covering the whole scene
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            rows: vec![0; scene.height as usize],
        }
    }

    /// Empty landscape with `positions` merged in
    pub fn with_cells(scene: Scene, positions: impl IntoIterator<Item = Position>) -> Self {
        let mut landscape = Self::new(scene);
        landscape.merge(positions);
        landscape
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    #[inline(always)]
    fn row_index(&self, row: i32) -> Option<usize> {
        if row < 0 || row > self.scene.max_y() {
            return None;
        }
        Some(row as usize)
    }

    /// Column mask of `row` (0 for rows outside the scene)
    pub fn row_mask(&self, row: i32) -> u64 {
        self.row_index(row).map_or(0, |r| self.rows[r])
    }

    /// Occupied columns of `row`, ascending
    pub fn row_occupancy(&self, row: i32) -> Columns {
        Columns {
            mask: self.row_mask(row),
        }
    }

    /// Number of occupied cells in `row`
    pub fn row_len(&self, row: i32) -> usize {
        self.row_mask(row).count_ones() as usize
    }

    /// True if `pos` is inside the scene and settled
    pub fn is_occupied(&self, pos: Position) -> bool {
        if !self.scene.contains(pos) {
            return false;
        }
        self.rows[pos.y as usize] & (1u64 << pos.x) != 0
    }

    /// Add one cell. Returns false (and stores nothing) when `pos` is off-scene.
    pub fn insert(&mut self, pos: Position) -> bool {
        if !self.scene.contains(pos) {
            return false;
        }
        self.rows[pos.y as usize] |= 1u64 << pos.x;
        true
    }

    /// Add every in-scene position; off-scene positions are dropped.
    pub fn merge(&mut self, positions: impl IntoIterator<Item = Position>) {
        for pos in positions {
            self.insert(pos);
        }
    }

    /// Empty `row`
    pub fn clear_row(&mut self, row: i32) {
        if let Some(r) = self.row_index(row) {
            self.rows[r] = 0;
        }
    }

    /// True when `row` holds exactly `width` columns
    pub fn is_row_full(&self, row: i32, width: u8) -> bool {
        self.row_len(row) == width as usize
    }

    /// Loss condition: anything settled in the ceiling row
    pub fn touches_ceiling(&self) -> bool {
        self.row_mask(0) != 0
    }

    /// Total settled cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|m| m.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&m| m == 0)
    }

    /// All settled cells, top row first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, &mask)| {
            Columns { mask }.map(move |x| Position::new(x, y as i32))
        })
    }

    /// `(row, columns)` for every row, top row first
    pub fn rows(&self) -> impl Iterator<Item = (i32, Columns)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(y, &mask)| (y as i32, Columns { mask }))
    }

    /// Raw row masks, top row first
    pub fn row_masks(&self) -> &[u64] {
        &self.rows
    }

    pub(crate) fn set_row_mask(&mut self, row: i32, mask: u64) {
        if let Some(r) = self.row_index(row) {
            self.rows[r] = mask & self.scene.full_row_mask();
        }
    }
}

/// Iterator over the columns set in a row mask.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    mask: u64,
}

impl Iterator for Columns {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.mask == 0 {
            return None;
        }
        let x = self.mask.trailing_zeros() as i32;
        self.mask &= self.mask - 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Columns {}
