use crate::helpe::*;

/// The ordered set of candidate chunks, plus the page size they
/// are all multiples of. Pure configuration: no behavior beyond
/// exposing ordered iteration.
#[derive(Debug, Clone)]
pub struct Catalog {
    page_size:  Bytes,
    chunks:     Vec<Chunk>,
}

impl Catalog {
    /// Builds a [Catalog] from raw chunk sizes. A successfully
    /// returned catalog is guaranteed to be compliant with all of
    /// the solver's assumptions. These are:
    /// - the page size is nonzero
    /// - at least one chunk exists
    /// - every chunk size is a nonzero multiple of the page size
    /// - chunk sizes are strictly ascending
    ///
    /// This function is the gatekeeper to the rest of the library:
    /// the solver itself never re-validates its input.
    pub fn new(page_size: Bytes, sizes: Vec<Bytes>) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError {
                message: String::from("Zero page size given!"),
                culprit: 0,
            });
        }
        if sizes.is_empty() {
            return Err(ConfigError {
                message: String::from("Empty chunk catalog given!"),
                culprit: 0,
            });
        }
        let chunks: Vec<Chunk> = sizes.into_iter()
            .enumerate()
            .map(|(index, size)| Chunk::new(index, size))
            .collect();
        for c in &chunks {
            if !c.is_page_multiple(page_size) {
                return Err(ConfigError {
                    message: String::from("Chunk size not a multiple of the page size!"),
                    culprit: c.size,
                });
            }
        }
        if let Some((_, bad)) = chunks.iter()
            .tuple_windows()
            .find(|(prev, next)| prev >= next) {
            return Err(ConfigError {
                message: String::from("Chunk sizes not strictly ascending!"),
                culprit: bad.size,
            });
        }

        Ok(Self {
            page_size,
            chunks,
        })
    }

    #[inline(always)]
    pub fn page_size(&self) -> Bytes {
        self.page_size
    }

    /// Chunks in ascending size order.
    #[inline(always)]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

/// The ordered list of requested allocation sizes. Duplicates are
/// permitted and not deduplicated--each produces its own output
/// record.
#[derive(Debug, Clone)]
pub struct Requests {
    sizes: Vec<Bytes>,
}

impl Requests {
    /// Same gatekeeper role as [Catalog::new]. Requirements:
    /// - at least one size
    /// - all sizes nonzero
    /// - sizes ascending (equal neighbors allowed)
    pub fn new(sizes: Vec<Bytes>) -> Result<Self, ConfigError> {
        if sizes.is_empty() {
            return Err(ConfigError {
                message: String::from("Empty allocation size list given!"),
                culprit: 0,
            });
        }
        if sizes.contains(&0) {
            return Err(ConfigError {
                message: String::from("Allocation size of 0 found!"),
                culprit: 0,
            });
        }
        if let Some((_, &bad)) = sizes.iter()
            .tuple_windows()
            .find(|(prev, next)| prev > next) {
            return Err(ConfigError {
                message: String::from("Allocation sizes not ascending!"),
                culprit: bad,
            });
        }

        Ok(Self { sizes })
    }

    #[inline(always)]
    pub fn sizes(&self) -> &[Bytes] {
        &self.sizes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_accepts_valid_input() {
        let cat = Catalog::new(16 * KB, vec![16 * KB, 32 * KB, 48 * KB]).unwrap();
        assert_eq!(cat.page_size(), 16 * KB);
        assert_eq!(cat.chunks().len(), 3);
        assert_eq!(cat.chunks()[2].index, 2);
        assert_eq!(cat.chunks()[2].size, 48 * KB);
        assert!(cat.chunks()[0].is_page_multiple(16 * KB));
        assert_eq!(cat.chunks()[1].pages(16 * KB), 2);
    }

    #[test]
    fn catalog_rejects_zero_page() {
        assert!(Catalog::new(0, vec![16 * KB]).is_err());
    }

    #[test]
    fn catalog_rejects_empty_input() {
        assert!(Catalog::new(16 * KB, vec![]).is_err());
    }

    #[test]
    fn catalog_rejects_non_page_multiple() {
        let err = Catalog::new(16 * KB, vec![16 * KB, 20 * KB]).unwrap_err();
        assert_eq!(err.culprit, 20 * KB);
    }

    #[test]
    fn catalog_rejects_unsorted_sizes() {
        assert!(Catalog::new(16 * KB, vec![32 * KB, 16 * KB]).is_err());
        // Equal neighbors are just as bad: ordering must be strict.
        assert!(Catalog::new(16 * KB, vec![16 * KB, 16 * KB]).is_err());
    }

    #[test]
    fn requests_allow_duplicates() {
        let reqs = Requests::new(vec![8, 8, 24]).unwrap();
        assert_eq!(reqs.len(), 3);
    }

    #[test]
    fn requests_reject_bad_input() {
        assert!(Requests::new(vec![]).is_err());
        assert!(Requests::new(vec![8, 0, 24]).is_err());
        assert!(Requests::new(vec![24, 8]).is_err());
    }
}
