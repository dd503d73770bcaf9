use serde::Serialize;

use crate::utils::HeightMap2D;

// What downstream gameplay should treat a cell as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    End,
}

// One grid position. Adjacency is stored as coordinates and resolved through the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    x: usize,
    y: usize,
    pub elevation: f32,
    pub weight: u32, // visits by the walk
    pub kind: CellKind,
    neighbors: Vec<(usize, usize)>,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            elevation: 0.0,
            weight: 0,
            kind: CellKind::Empty,
            neighbors: Vec::new(),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn neighbors(&self) -> &[(usize, usize)] {
        &self.neighbors
    }

    pub fn is_neighbor(&self, pos: (usize, usize)) -> bool {
        self.neighbors.contains(&pos)
    }

    pub fn visited(&self) -> bool {
        self.weight > 0
    }
}

// dimension × dimension cells, row-major: index = y * dimension + x
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    dimension: usize,
    scale: f32,
    cells: Vec<Cell>,
}

impl Grid {
    // Fresh grid with every cell at its defaults
    pub fn reset(dimension: usize, scale: f32) -> Self {
        let mut cells = Vec::with_capacity(dimension * dimension);
        for y in 0..dimension {
            for x in 0..dimension {
                cells.push(Cell::new(x, y));
            }
        }
        Self {
            dimension,
            scale,
            cells,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.dimension && (y as usize) < self.dimension
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.dimension && y < self.dimension,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.dimension,
            self.dimension
        );
        y * self.dimension + x
    }

    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.idx(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let i = self.idx(x, y);
        &mut self.cells[i]
    }

    // Replace a cell wholesale. Its coordinates must match the slot.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert_eq!(cell.position(), (x, y), "cell stored at the wrong position");
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // Record an undirected edge. Each direction is stored at most once.
    pub fn connect(&mut self, a: (usize, usize), b: (usize, usize)) {
        let (ia, ib) = (self.idx(a.0, a.1), self.idx(b.0, b.1));
        if !self.cells[ia].neighbors.contains(&b) {
            self.cells[ia].neighbors.push(b);
        }
        if !self.cells[ib].neighbors.contains(&a) {
            self.cells[ib].neighbors.push(a);
        }
    }

    pub fn neighbors_of(&self, x: usize, y: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.get(x, y)
            .neighbors
            .iter()
            .map(move |&(nx, ny)| self.get(nx, ny))
    }

    pub fn total_weight(&self) -> u64 {
        self.cells.iter().map(|c| c.weight as u64).sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited()).count()
    }

    pub fn find_kind(&self, kind: CellKind) -> Option<&Cell> {
        self.cells.iter().find(|c| c.kind == kind)
    }

    // Copy elevations out as a [y][x] height map
    pub fn elevations(&self) -> HeightMap2D {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|c| c.elevation).collect())
            .collect()
    }

    // Overwrite every cell's elevation from a [y][x] height map of the same size
    pub fn merge_elevations(&mut self, map: &HeightMap2D) {
        assert_eq!(map.len(), self.dimension, "height map row count mismatch");
        for (y, row) in map.iter().enumerate() {
            assert_eq!(row.len(), self.dimension, "height map column count mismatch");
            for (x, &h) in row.iter().enumerate() {
                self.get_mut(x, y).elevation = h;
            }
        }
    }
}
