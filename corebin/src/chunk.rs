use crate::helpe::*;

impl Chunk {
    pub fn new(index: usize, size: Bytes) -> Self {
        Self {
            index,
            size,
        }
    }

    /// Returns `true` if a single allocation of `alloc` bytes
    /// fits in the full chunk at all.
    #[inline(always)]
    pub fn holds(&self, alloc: Bytes) -> bool {
        alloc <= self.size
    }

    /// Number of whole pages the chunk spans.
    #[inline(always)]
    pub fn pages(&self, page_size: Bytes) -> Bytes {
        self.size / page_size
    }

    /// Returns `true` if the chunk size is a nonzero multiple
    /// of `page_size`.
    #[inline(always)]
    pub fn is_page_multiple(&self, page_size: Bytes) -> bool {
        self.size != 0 && self.size % page_size == 0
    }
}

//-----TREATING GROUPS OF CHUNKS (START)---------------------
/*
   The solver always walks chunks in order of increasing size,
   and a catalog guarantees that order at construction.

   To support such chunk containers, we implement the Ord trait
   of Chunk according to the `size` field.
*/
impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.size.cmp(&other.size)
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Chunk {}

impl Hash for Chunk {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}
//-----TREATING GROUPS OF CHUNKS (END)---------------------
