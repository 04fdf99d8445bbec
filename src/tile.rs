//! Contiguous tile partitioning for the fork-join patterns.
//!
//! Reduce and scan split their index range into `min(n, workers)` contiguous
//! tiles and spawn one task per tile. Tile lengths differ by at most one and
//! the remainder goes to the lowest-indexed tiles, so the partition depends
//! only on `(n, workers)` and never on scheduling.

use std::ops::Range;

/// A contiguous chunk of an index range, handled by one fork-join task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Position of this tile within the partition.
    pub index: usize,
    /// First element index covered by this tile.
    pub start: usize,
    /// Number of elements covered by this tile.
    pub len: usize,
}

impl Tile {
    /// The half-open index range `[start, start + len)` this tile covers.
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// One past the last index covered by this tile.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Partitions `[0, n)` into `min(n, workers)` contiguous tiles.
///
/// # Panics
///
/// Panics if `workers` is zero.
pub fn tiles(n: usize, workers: usize) -> Vec<Tile> {
    tiles_in(0..n, workers)
}

/// Partitions an arbitrary index range the way [`tiles`] partitions `[0, n)`.
///
/// With `leftover = len % count` tiles getting one extra element, start
/// offsets have a closed form: `tile * (size + 1)` below the leftover
/// boundary, `leftover * (size + 1) + (tile - leftover) * size` above it.
/// An empty range yields no tiles; tiles are never empty.
///
/// # Panics
///
/// Panics if `workers` is zero.
pub fn tiles_in(range: Range<usize>, workers: usize) -> Vec<Tile> {
    assert!(workers >= 1, "Partitioning requires at least one worker");

    let n = range.len();
    let count = n.min(workers);
    let mut parts = Vec::with_capacity(count);
    if count == 0 {
        return parts;
    }

    let size = n / count;
    let leftover = n % count;
    for index in 0..count {
        let offset = if index < leftover {
            index * (size + 1)
        } else {
            leftover * (size + 1) + (index - leftover) * size
        };
        parts.push(Tile {
            index,
            start: range.start + offset,
            len: size + usize::from(index < leftover),
        });
    }
    parts
}

/// Splits `data` into the per-tile mutable subslices of an ascending tile
/// sequence, skipping any gap before the first tile.
///
/// Scan phase three uses this to hand each task its own destination tile.
pub(crate) fn split_tiles_mut<'a, T>(data: &'a mut [T], parts: &[Tile]) -> Vec<&'a mut [T]> {
    let mut slices = Vec::with_capacity(parts.len());
    let mut rest = data;
    let mut cursor = 0;
    for tile in parts {
        let (_, tail) = rest.split_at_mut(tile.start - cursor);
        let (slice, tail) = tail.split_at_mut(tile.len);
        slices.push(slice);
        rest = tail;
        cursor = tile.end();
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(parts: &[Tile]) -> Vec<usize> {
        parts.iter().map(|t| t.len).collect()
    }

    #[test]
    fn test_even_split() {
        let parts = tiles(8, 4);
        assert_eq!(parts.len(), 4);
        assert_eq!(lengths(&parts), vec![2, 2, 2, 2]);
        assert_eq!(parts[0].start, 0);
        assert_eq!(parts[3].end(), 8);
    }

    #[test]
    fn test_leftover_goes_to_lowest_tiles() {
        let parts = tiles(10, 4);
        assert_eq!(lengths(&parts), vec![3, 3, 2, 2]);
        assert_eq!(parts[0].range(), 0..3);
        assert_eq!(parts[1].range(), 3..6);
        assert_eq!(parts[2].range(), 6..8);
        assert_eq!(parts[3].range(), 8..10);
    }

    #[test]
    fn test_more_workers_than_elements() {
        let parts = tiles(3, 8);
        assert_eq!(parts.len(), 3);
        assert_eq!(lengths(&parts), vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_range_has_no_tiles() {
        assert!(tiles(0, 4).is_empty());
        assert!(tiles_in(5..5, 4).is_empty());
    }

    #[test]
    fn test_tiles_cover_range_exactly() {
        for n in 0..40 {
            for workers in 1..10 {
                let parts = tiles(n, workers);
                let mut expected = 0;
                for (i, tile) in parts.iter().enumerate() {
                    assert_eq!(tile.index, i);
                    assert_eq!(tile.start, expected, "gap at tile {} for n={}", i, n);
                    assert!(tile.len > 0, "empty tile for n={} workers={}", n, workers);
                    expected = tile.end();
                }
                assert_eq!(expected, n, "partition of n={} workers={}", n, workers);
            }
        }
    }

    #[test]
    fn test_tile_lengths_differ_by_at_most_one() {
        for n in 1..60 {
            for workers in 1..12 {
                let parts = tiles(n, workers);
                let min = parts.iter().map(|t| t.len).min().unwrap();
                let max = parts.iter().map(|t| t.len).max().unwrap();
                assert!(max - min <= 1, "uneven tiles for n={} workers={}", n, workers);
            }
        }
    }

    #[test]
    fn test_offset_range_partition() {
        let parts = tiles_in(1..8, 3);
        assert_eq!(parts[0].range(), 1..4);
        assert_eq!(parts[1].range(), 4..6);
        assert_eq!(parts[2].range(), 6..8);
    }

    #[test]
    fn test_split_tiles_mut_skips_leading_gap() {
        let mut data = [0, 1, 2, 3, 4, 5, 6, 7];
        let parts = tiles_in(1..8, 3);
        let slices = split_tiles_mut(&mut data, &parts);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], &[1, 2, 3]);
        assert_eq!(slices[1], &[4, 5]);
        assert_eq!(slices[2], &[6, 7]);
    }

    #[test]
    fn test_split_tiles_mut_writes_are_disjoint() {
        let mut data = vec![0u32; 11];
        let parts = tiles(11, 4);
        for slice in split_tiles_mut(&mut data, &parts) {
            for value in slice.iter_mut() {
                *value += 1;
            }
        }
        assert!(data.iter().all(|&v| v == 1));
    }
}
