use crate::error::InvalidArgument;

/// Weighted quick-union over labels `0..len`.
///
/// Smaller trees are always hung under larger ones, which keeps every tree
/// at height O(log n). No path compression is done, so `find` is read-only.
#[derive(Clone, Debug)]
pub struct WeightedUnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedUnionFind {
    pub fn new(n: usize) -> Result<Self, InvalidArgument> {
        if n < 1 {
            return Err(InvalidArgument::UniverseSize { n });
        }
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of the label universe.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn find(&self, mut p: usize) -> usize {
        while p != self.parent[p] {
            p = self.parent[p];
        }
        p
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }

        // smaller root points to larger; ties absorb into p's root
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }
}
