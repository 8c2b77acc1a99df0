//! Grid world - square matrix of resource/occupancy cells

/// One grid cell
///
/// `occupied` is only meaningful when occupancy tracking is active; it is
/// recomputed from the agent set at the start of every tracked tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Gold or not gold?
    pub resource: bool,
    /// Some agent currently sits here
    pub occupied: bool,
}

/// Square matrix of cells, stored flat
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Edge length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    // Column-major to match the original world[x][y] layout
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        x * self.size + y
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn is_resource(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)].resource
    }

    pub fn set_resource(&mut self, x: usize, y: usize, resource: bool) {
        let i = self.idx(x, y);
        self.cells[i].resource = resource;
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)].occupied
    }

    pub fn set_occupied(&mut self, x: usize, y: usize, occupied: bool) {
        let i = self.idx(x, y);
        self.cells[i].occupied = occupied;
    }

    /// Rebuild occupancy from scratch so it exactly matches the given agent
    /// positions (no drift across tick boundaries)
    pub fn refresh_occupancy<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for cell in &mut self.cells {
            cell.occupied = false;
        }
        for (x, y) in positions {
            let i = self.idx(x, y);
            self.cells[i].occupied = true;
        }
    }

    /// Number of resource cells, for host display
    pub fn resource_count(&self) -> usize {
        self.cells.iter().filter(|c| c.resource).count()
    }
}
