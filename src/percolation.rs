// percolation.rs
// n-by-n percolation grid backed by a weighted union-find with two virtual sentinels

use crate::error::InvalidArgument;
use crate::union_find::WeightedUnionFind;
use smallvec::SmallVec;


/// Grid of blocked/open sites addressed by 1-based `(row, col)`.
///
/// Site `(row, col)` owns union-find label `(row - 1) * n + col`. Label `0`
/// is the virtual top and label `n * n + 1` the virtual bottom, so
/// percolation reduces to one connectivity query between the two.
///
/// Every open bottom-row site is tied straight to the virtual bottom. Once
/// the grid percolates, those sites report full through the bottom sentinel
/// even without their own path to the top row (backwash).
#[derive(Clone, Debug)]
pub struct Percolation {
    n: usize,
    status: Vec<bool>,
    open_sites: usize,
    uf: WeightedUnionFind,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked.
    pub fn new(n: usize) -> Result<Self, InvalidArgument> {
        let sites = n
            .checked_mul(n)
            .filter(|&s| s >= 1 && s.checked_add(2).is_some())
            .ok_or(InvalidArgument::GridSize { n })?;
        Ok(Self {
            n,
            status: vec![false; sites],
            open_sites: 0,
            uf: WeightedUnionFind::new(sites + 2)?,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    fn virtual_top(&self) -> usize {
        0
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), InvalidArgument> {
        if row < 1 || col < 1 || row > self.n || col > self.n {
            return Err(InvalidArgument::SiteOutOfRange { row, col, n: self.n });
        }
        Ok(())
    }

    /// Union-find label of an in-range site.
    fn address(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    /// Index into `status` of an in-range site.
    fn cell(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    /// Open site `(row, col)` and connect it to its open neighbours.
    /// Opening an already open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), InvalidArgument> {
        self.validate(row, col)?;

        let cell = self.cell(row, col);
        if self.status[cell] {
            return Ok(());
        }
        self.status[cell] = true;
        self.open_sites += 1;

        let n = self.n;
        let mut links: SmallVec<[usize; 6]> = SmallVec::new();
        if row == 1 {
            links.push(self.virtual_top());
        }
        if row > 1 && self.status[self.cell(row - 1, col)] {
            links.push(self.address(row - 1, col));
        }
        if row < n && self.status[self.cell(row + 1, col)] {
            links.push(self.address(row + 1, col));
        }
        if col > 1 && self.status[self.cell(row, col - 1)] {
            links.push(self.address(row, col - 1));
        }
        if col < n && self.status[self.cell(row, col + 1)] {
            links.push(self.address(row, col + 1));
        }
        if row == n {
            links.push(self.virtual_bottom());
        }

        let site = self.address(row, col);
        for other in links {
            self.uf.union(site, other);
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        self.validate(row, col)?;
        Ok(self.status[self.cell(row, col)])
    }

    /// Whether an open site is connected to the virtual top.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        self.validate(row, col)?;
        if !self.status[self.cell(row, col)] {
            return Ok(false);
        }
        Ok(self.uf.connected(self.address(row, col), self.virtual_top()))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Fraction of the n² sites currently open.
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / (self.n * self.n) as f64
    }

    pub fn percolates(&self) -> bool {
        self.uf.connected(self.virtual_top(), self.virtual_bottom())
    }
}
