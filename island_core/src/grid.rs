use crate::{field::ScalarField, GenerationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    is_water: bool,
}

impl Cell {
    pub const WATER: Cell = Cell { is_water: true };
    pub const LAND: Cell = Cell { is_water: false };

    pub fn new(is_water: bool) -> Self {
        Self { is_water }
    }

    #[inline]
    pub fn is_water(self) -> bool {
        self.is_water
    }

    #[inline]
    pub fn is_land(self) -> bool {
        !self.is_water
    }
}

/// Axis-aligned neighbour directions in the XZ plane. `Down`/`Up` follow the
/// grid's y axis, which maps to world z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }
}

/// Land/water classification for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> Cell) -> Self {
        let mut cells = Vec::with_capacity((size as usize) * (size as usize));
        for y in 0..size {
            for x in 0..size {
                cells.push(f(x, y));
            }
        }
        Self { size, cells }
    }

    /// Parse rows of `#` (land) and `.` (water); the first row is `y = 0`.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len() as u32;
        Self::from_fn(size, |x, y| {
            let row = rows[y as usize].as_bytes();
            debug_assert_eq!(row.len(), size as usize, "grid rows must be square");
            Cell::new(row[x as usize] != b'#')
        })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        debug_assert!(x < self.size && y < self.size);
        self.cells[(y * self.size + x) as usize]
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(self.cells[(y * size + x) as usize])
    }

    /// Neighbour in `dir`, or `None` past the grid border.
    pub fn neighbor(&self, x: u32, y: u32, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.delta();
        self.get(x as i64 + dx as i64, y as i64 + dy as i64)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Land cells as `(x, y)` in row order.
    pub fn land_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_land())
            .map(move |(idx, _)| (idx as u32 % size, idx as u32 / size))
    }

    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_land()).count()
    }
}

/// `is_water = noise - falloff < water_level`; equality stays land.
pub fn classify(
    noise: &ScalarField,
    falloff: &ScalarField,
    water_level: f32,
) -> Result<Grid, GenerationError> {
    if noise.size != falloff.size {
        return Err(GenerationError::FieldSizeMismatch {
            noise: noise.size,
            falloff: falloff.size,
        });
    }
    Ok(Grid::from_fn(noise.size, |x, y| {
        let value = noise.sample(x, y) - falloff.sample(x, y);
        Cell::new(value < water_level)
    }))
}
