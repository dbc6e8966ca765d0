use crate::helpe::*;

/// Allocations at or above this size stop being carved many-to-a-chunk.
/// Per-object waste is irrelevant up there: the allocator rounds the
/// request up to the nearest chunk and dedicates the whole chunk to a
/// single object.
pub const SOLO_THRESHOLD: Bytes = 128 * KB;

/// Computes one record of the size-class table: the smallest catalog
/// chunk--and the fullest page-granular portion of it--whose per-object
/// waste stays below `waste_limit` percent.
///
/// This is a first-fit search, not a minimum-waste one: the first
/// chunk/portion combination under the limit wins outright, even if a
/// later combination would waste less. The outer walk ascends through
/// chunk sizes; the portion probe descends from the full chunk one page
/// at a time, so fuller chunks are preferred over emptier ones.
///
/// Returns [None] when the catalog offers nothing acceptable.
pub fn best_fit(
    page_size:      Bytes,
    chunks:         &[Chunk],
    alloc_size:     Bytes,
    waste_limit:    f64,
) -> Option<Fit> {
    if alloc_size >= SOLO_THRESHOLD {
        for chunk in chunks {
            if chunk.holds(alloc_size) {
                return Some(Fit {
                    count:      1,
                    chunk:      *chunk,
                    waste_pct:  0.0,
                });
            }
        }
    } else {
        for chunk in chunks {
            if !chunk.holds(alloc_size) {
                continue;
            }
            if alloc_size > 8 * chunk.size {
                continue;
            }

            // Waste per allocation, example:
            // chunk_size = 16KB, alloc_size = 24
            // allocation count = (16KB / 24) = 682
            // waste per allocation = (16384.0 - (682.0 * 24.0)) / 682.0 = 0.0234
            let mut portion = chunk.size;
            while portion >= page_size && portion >= alloc_size {
                let count = portion / alloc_size;
                let waste_bytes = (portion - count * alloc_size) as f64 / count as f64;
                let waste_pct = waste_bytes / alloc_size as f64 * 100.0;
                if waste_pct < waste_limit {
                    // The recorded chunk keeps its declared size; the
                    // allocator commits only `portion` bytes of its
                    // range for this class.
                    return Some(Fit {
                        count,
                        chunk:      *chunk,
                        waste_pct,
                    });
                }
                portion -= page_size;
            }
        }
    }

    None
}

/// Solves the whole table: one [Bin] per requested size, in request
/// order.
///
/// Each request is resolved independently of every other, so the work
/// fans out across them; the indexed collect keeps output order
/// identical to input order, as if processed sequentially.
pub fn solve(catalog: &Catalog, requests: &Requests, waste_limit: f64) -> Vec<Bin> {
    let page_size = catalog.page_size();
    let chunks = catalog.chunks();

    requests.sizes()
        .par_iter()
        .enumerate()
        .map(|(index, &alloc_size)| {
            Bin {
                index,
                alloc_size,
                fit: best_fit(page_size, chunks, alloc_size, waste_limit),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    fn catalog(page_size: Bytes, sizes: &[Bytes]) -> Catalog {
        Catalog::new(page_size, sizes.to_vec()).unwrap()
    }

    #[test]
    fn carves_small_allocs_out_of_the_first_chunk() {
        let cat = catalog(16 * KB, &[16 * KB, 32 * KB, 48 * KB]);
        let fit = best_fit(cat.page_size(), cat.chunks(), 24, 10.0).unwrap();
        assert_eq!(fit.chunk.size, 16 * KB);
        assert_eq!(fit.count, 682);
        let expected = ((16384.0 - 682.0 * 24.0) / 682.0) / 24.0 * 100.0;
        assert!((fit.waste_pct - expected).abs() < 1e-12);
        assert!(fit.waste_pct < 10.0);
    }

    #[test]
    fn dedicates_a_whole_chunk_to_large_allocs() {
        let cat = catalog(16 * KB, &[16 * KB, 128 * KB, 256 * KB]);
        let fit = best_fit(cat.page_size(), cat.chunks(), 200_000, 10.0).unwrap();
        assert_eq!(fit.chunk.size, 256 * KB);
        assert_eq!(fit.count, 1);
        assert_eq!(fit.waste_pct, 0.0);
    }

    #[test]
    fn exact_threshold_alloc_takes_its_own_chunk() {
        let cat = catalog(16 * KB, &[16 * KB, 128 * KB, 256 * KB]);
        let fit = best_fit(cat.page_size(), cat.chunks(), SOLO_THRESHOLD, 10.0).unwrap();
        assert_eq!(fit.chunk.size, 128 * KB);
        assert_eq!(fit.count, 1);
    }

    #[test]
    fn reports_no_fit_when_the_catalog_tops_out() {
        let cat = catalog(16 * KB, &[16 * KB, 64 * KB]);
        // Below the solo threshold, but bigger than every chunk.
        assert!(best_fit(cat.page_size(), cat.chunks(), 100_000, 10.0).is_none());
        // Above the solo threshold with the same catalog.
        assert!(best_fit(cat.page_size(), cat.chunks(), 200_000, 10.0).is_none());
    }

    #[test]
    fn shrinks_the_portion_until_the_limit_is_met() {
        // The full 12KB chunk holds four 2700-byte objects at ~13.8%
        // waste; the 8KB portion holds three at ~1.1%.
        let cat = catalog(4 * KB, &[12 * KB]);
        let fit = best_fit(cat.page_size(), cat.chunks(), 2700, 5.0).unwrap();
        assert_eq!(fit.count, 3);
        // Still the full chunk on record, not the shrunk portion.
        assert_eq!(fit.chunk.size, 12 * KB);
        assert!(fit.waste_pct < 5.0);
    }

    #[test]
    fn first_passing_chunk_wins_over_better_later_ones() {
        // 16KB clears a 10% limit at ~9.2% waste; 24KB would waste
        // only ~2.4%, but first-fit never looks that far.
        let cat = catalog(4 * KB, &[16 * KB, 24 * KB]);
        let fit = best_fit(cat.page_size(), cat.chunks(), 3000, 10.0).unwrap();
        assert_eq!(fit.chunk.index, 0);
        assert_eq!(fit.count, 5);
    }

    #[test]
    fn table_preserves_request_order() {
        let cat = catalog(16 * KB, &[16 * KB, 32 * KB]);
        let reqs = Requests::new(vec![8, 8, 24, 24]).unwrap();
        let bins = solve(&cat, &reqs, 10.0);
        assert_eq!(bins.len(), reqs.len());
        for (at, bin) in bins.iter().enumerate() {
            assert_eq!(bin.index, at);
        }
        // Duplicate requests produce identical records modulo index.
        assert_eq!(bins[0].fit, bins[1].fit);
        assert_eq!(bins[2].fit, bins[3].fit);
    }

    #[test]
    fn solving_twice_yields_identical_tables() {
        let cat = Catalog::new(presets::PAGE_SIZE, presets::chunk_sizes()).unwrap();
        let reqs = Requests::new(presets::alloc_sizes()).unwrap();
        let once = solve(&cat, &reqs, 10.0);
        let twice = solve(&cat, &reqs, 10.0);
        assert_eq!(once, twice);
    }
}
