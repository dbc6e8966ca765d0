//! Welcome to `corebin`!

mod chunk;

pub mod catalog;
pub mod solve;
pub mod emit;
pub mod presets;
pub mod helpe;

pub use crate::helpe::*;

/// Our fundamental unit of interest. A [`Chunk`] is a candidate
/// backing block for one or more size classes:
///
/// 1. Its [`size`](Chunk::size) is always a positive multiple of
///     the configured page size. The solver never checks this on
///     its own--a [`Catalog`](crate::catalog::Catalog) does, once,
///     at construction.
/// 2. Its [`index`](Chunk::index) is its position in the catalog
///     it was born from, and serves as its stable identity: the
///     emitted table refers to chunks by index, never by size.
///
/// > ***ATTENTION:*** the chunk recorded in a [`Fit`] is always the
/// > *full declared chunk*, even when the solver settled on a smaller
/// > effective portion of it. The allocator is understood to commit
/// > only the portion's worth of the chunk's virtual range for that
/// > size class, leaving the rest uncommitted.
#[derive(Debug, Clone, Copy)]
pub struct Chunk {
    pub index:  usize,
    pub size:   Bytes,
}

/// A resolved chunk assignment: how one size class is carved out
/// of its chosen [`Chunk`].
///
/// On the whole-chunk path (large allocations), `count` is 1 and
/// `waste_pct` is 0 by definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// How many objects of the class are carved from the chunk portion.
    pub count:      Bytes,
    /// The full catalog chunk backing the class.
    pub chunk:      Chunk,
    /// Bytes of the used portion not occupied by objects, as a
    /// percentage of one object's size.
    pub waste_pct:  f64,
}

/// One row of the size-class table, answering for exactly one
/// requested allocation size.
///
/// The output of a solve is one [`Bin`] per request, in request
/// order, so `index` is redundant with position--but the emitted
/// table format wants it spelled out, so it is kept.
///
/// An unresolved request (no chunk/portion combination under the
/// waste limit) carries `fit: None` instead of the zeroed record
/// the table format would otherwise ship silently. The requested
/// size stays populated so a consumer can tell which class failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub index:      usize,
    pub alloc_size: Bytes,
    pub fit:        Option<Fit>,
}
