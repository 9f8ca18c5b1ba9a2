//! Synthetic topology generators.
//!
//! Each generator reproduces the standard graph construction of the same
//! name: same node count, same edge set, unit edge lengths.  Node ids are
//! assigned as documented per function.

use drt_core::NodeId;

use crate::{Topology, TopologyBuilder};

/// Cycle on `n` nodes: `i -- (i+1) mod n`.
///
/// `n = 1` yields a single isolated node and `n = 2` a single edge.
pub fn ring(n: usize) -> Topology {
    let mut b = TopologyBuilder::with_capacity(n);
    b.add_nodes(n);
    for i in 0..n {
        b.add_edge(node(i), node((i + 1) % n), 1.0);
    }
    b.build()
}

/// Path on `n` nodes: `i -- i+1`.
pub fn line(n: usize) -> Topology {
    let mut b = TopologyBuilder::with_capacity(n.saturating_sub(1));
    b.add_nodes(n);
    for i in 1..n {
        b.add_edge(node(i - 1), node(i), 1.0);
    }
    b.build()
}

/// Star with hub `0` and `leaves` leaves `1..=leaves` (`leaves + 1` nodes).
pub fn star(leaves: usize) -> Topology {
    let mut b = TopologyBuilder::with_capacity(leaves);
    b.add_nodes(leaves + 1);
    for leaf in 1..=leaves {
        b.add_edge(node(0), node(leaf), 1.0);
    }
    b.build()
}

/// 2-D rectangular grid.  Cell `(r, c)` is `NodeId(r * cols + c)`.
pub fn grid(rows: usize, cols: usize) -> Topology {
    let mut b = TopologyBuilder::with_capacity(2 * rows * cols);
    b.add_nodes(rows * cols);
    let at = |r: usize, c: usize| node(r * cols + c);
    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                b.add_edge(at(r, c), at(r + 1, c), 1.0);
            }
            if c + 1 < cols {
                b.add_edge(at(r, c), at(r, c + 1), 1.0);
            }
        }
    }
    b.build()
}

/// Triangular lattice with `rows` rows and `cols` columns of triangles.
///
/// Lattice points are `(i, j)` with `i` in `0..=(cols+1)/2` along a row and
/// `j` in `0..=rows` across rows.  Rows are joined by vertical edges plus
/// one diagonal per cell, alternating direction between even and odd rows.
/// When `cols` is odd, the last point of every odd row is removed together
/// with its edges.  Remaining points are numbered row by row.
pub fn triangular_lattice(rows: usize, cols: usize) -> Topology {
    if rows == 0 || cols == 0 {
        return Topology::empty();
    }
    let per_row = cols.div_ceil(2); // points per row minus one
    let removed = |i: usize, j: usize| cols % 2 == 1 && i == per_row && j % 2 == 1;

    // Dense ids for the surviving lattice points.
    let mut ids = vec![NodeId::UNSET; (per_row + 1) * (rows + 1)];
    let slot = |i: usize, j: usize| j * (per_row + 1) + i;
    let mut next = 0usize;
    for j in 0..=rows {
        for i in 0..=per_row {
            if !removed(i, j) {
                ids[slot(i, j)] = node(next);
                next += 1;
            }
        }
    }

    let mut b = TopologyBuilder::with_capacity(3 * next);
    b.add_nodes(next);
    let mut link = |(i1, j1): (usize, usize), (i2, j2): (usize, usize)| {
        if !removed(i1, j1) && !removed(i2, j2) {
            b.add_edge(ids[slot(i1, j1)], ids[slot(i2, j2)], 1.0);
        }
    };

    for j in 0..=rows {
        for i in 0..per_row {
            link((i, j), (i + 1, j));
        }
    }
    for j in 0..rows {
        for i in 0..=per_row {
            link((i, j), (i, j + 1));
        }
    }
    for j in 0..rows {
        for i in 0..per_row {
            if j % 2 == 1 {
                link((i, j), (i + 1, j + 1));
            } else {
                link((i + 1, j), (i, j + 1));
            }
        }
    }
    b.build()
}

#[inline]
fn node(i: usize) -> NodeId {
    NodeId(i as u32)
}
