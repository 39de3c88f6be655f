use percolation_sim::percolation::Percolation;
use percolation_sim::sampler::{RandomSource, SiteSampler};
use std::collections::VecDeque;

/// Sites reachable from an open top-row site through open 4-neighbours.
fn reachable_from_top(grid: &Percolation) -> Vec<bool> {
    let n = grid.size();
    let mut seen = vec![false; n * n];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    for col in 1..=n {
        if grid.is_open(1, col).unwrap_or(false) {
            seen[col - 1] = true;
            queue.push_back((1, col));
        }
    }
    while let Some((row, col)) = queue.pop_front() {
        let neighbours = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbours {
            if r < 1 || c < 1 || r > n || c > n {
                continue;
            }
            let idx = (r - 1) * n + (c - 1);
            if !seen[idx] && grid.is_open(r, c).unwrap_or(false) {
                seen[idx] = true;
                queue.push_back((r, c));
            }
        }
    }
    seen
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let n: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(20);
    let grids: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("=== Backwash Probe ===");
    println!("Grid: {}x{}, grids: {}, seed: {}", n, n, grids, seed);

    let mut grids_with_backwash = 0usize;
    let mut backwash_sites = 0usize;
    let mut full_bottom_sites = 0usize;

    for g in 0..grids {
        let mut sampler = RandomSource::Fastrand.seeded(seed.wrapping_add(g as u64));
        let mut grid = match Percolation::new(n) {
            Ok(grid) => grid,
            Err(e) => {
                println!("❌ {}", e);
                return;
            }
        };
        while !grid.percolates() {
            let row = sampler.sample_site(n);
            let col = sampler.sample_site(n);
            if let Err(e) = grid.open(row, col) {
                println!("❌ {}", e);
                return;
            }
        }

        let hydraulic = reachable_from_top(&grid);
        let mut here = 0;
        for col in 1..=n {
            if grid.is_full(n, col).unwrap_or(false) {
                full_bottom_sites += 1;
                if !hydraulic[(n - 1) * n + (col - 1)] {
                    here += 1;
                }
            }
        }
        if here > 0 {
            grids_with_backwash += 1;
            backwash_sites += here;
        }
    }

    println!("Full bottom-row sites: {}", full_bottom_sites);
    println!(
        "Backwash sites: {} ({} of {} grids affected)",
        backwash_sites, grids_with_backwash, grids
    );
    if full_bottom_sites > 0 {
        println!(
            "  {:.2}% of full bottom-row sites are full only through the bottom sentinel",
            100.0 * backwash_sites as f64 / full_bottom_sites as f64
        );
    }
}
