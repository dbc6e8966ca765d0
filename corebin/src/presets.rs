//! The stock configuration the tool ships with: a 16KB page, a
//! 26-entry chunk catalog and a 160-entry allocation-size ladder.
//! Callers with different heap geometry pass their own lists
//! instead.

use crate::helpe::*;

/// The page size the stock tables were tuned for.
pub const PAGE_SIZE: Bytes = 16 * KB;

/// Candidate chunk sizes, ascending. All are multiples of
/// [PAGE_SIZE]; the step widens as sizes grow since big chunks
/// are committed page-by-page anyway.
pub fn chunk_sizes() -> Vec<Bytes> {
    vec![
        16 * KB,
        32 * KB,
        48 * KB,
        64 * KB,
        80 * KB,
        96 * KB,
        112 * KB,
        128 * KB,
        144 * KB,
        160 * KB,
        176 * KB,
        192 * KB,
        208 * KB,
        224 * KB,
        256 * KB,
        384 * KB,
        512 * KB,
        768 * KB,
        MB,
        2 * MB,
        4 * MB,
        8 * MB,
        32 * MB,
        64 * MB,
        256 * MB,
        512 * MB,
    ]
}

/// Requested allocation sizes, ascending. Dense at the small end
/// where waste hurts the most, then progressively sparser.
pub fn alloc_sizes() -> Vec<Bytes> {
    vec![
        8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 56, 64,
        80, 88, 96, 112, 128, 160, 192, 224, 256, 288, 320,
        352, 384, 448, 512, 640, 768, 896, 960,
        KB,
        KB + 128,
        KB + 256,
        KB + 384,
        KB + 512,
        KB + 640,
        KB + 768,
        KB + 896,
        2 * KB,
        2 * KB + 256,
        2 * KB + 512,
        2 * KB + 768,
        3 * KB,
        3 * KB + 256,
        3 * KB + 512,
        3 * KB + 768,
        4 * KB,
        4 * KB + 512,
        5 * KB,
        5 * KB + 512,
        6 * KB,
        6 * KB + 512,
        7 * KB,
        7 * KB + 512,
        8 * KB,
        9 * KB,
        10 * KB,
        11 * KB,
        12 * KB,
        13 * KB,
        14 * KB,
        15 * KB,
        16 * KB,
        18 * KB,
        20 * KB,
        22 * KB,
        24 * KB,
        26 * KB,
        28 * KB,
        30 * KB,
        32 * KB,
        36 * KB,
        40 * KB,
        44 * KB,
        48 * KB,
        52 * KB,
        56 * KB,
        60 * KB,
        64 * KB,
        72 * KB,
        80 * KB,
        88 * KB,
        96 * KB,
        104 * KB,
        112 * KB,
        120 * KB,
        128 * KB,
        144 * KB,
        160 * KB,
        176 * KB,
        192 * KB,
        208 * KB,
        224 * KB,
        240 * KB,
        256 * KB,
        288 * KB,
        320 * KB,
        352 * KB,
        384 * KB,
        416 * KB,
        448 * KB,
        480 * KB,
        512 * KB,
        576 * KB,
        640 * KB,
        704 * KB,
        768 * KB,
        832 * KB,
        896 * KB,
        960 * KB,
        MB,
        MB + 128 * KB,
        MB + 256 * KB,
        MB + 384 * KB,
        MB + 512 * KB,
        MB + 640 * KB,
        MB + 768 * KB,
        MB + 896 * KB,
        2 * MB,
        2 * MB + 256 * KB,
        2 * MB + 512 * KB,
        2 * MB + 768 * KB,
        3 * MB,
        3 * MB + 256 * KB,
        3 * MB + 512 * KB,
        3 * MB + 768 * KB,
        4 * MB,
        4 * MB + 512 * KB,
        5 * MB,
        5 * MB + 512 * KB,
        6 * MB,
        6 * MB + 512 * KB,
        7 * MB,
        7 * MB + 512 * KB,
        8 * MB,
        9 * MB,
        11 * MB,
        12 * MB,
        13 * MB,
        14 * MB,
        15 * MB,
        16 * MB,
        18 * MB,
        22 * MB,
        24 * MB,
        26 * MB,
        28 * MB,
        32 * MB,
        36 * MB,
        44 * MB,
        48 * MB,
        52 * MB,
        56 * MB,
        64 * MB,
        72 * MB,
        88 * MB,
        96 * MB,
        104 * MB,
        112 * MB,
        120 * MB,
        128 * MB,
        144 * MB,
        160 * MB,
        176 * MB,
        192 * MB,
        208 * MB,
        224 * MB,
        256 * MB,
        288 * MB,
        320 * MB,
        352 * MB,
        384 * MB,
        416 * MB,
        448 * MB,
    ]
}
