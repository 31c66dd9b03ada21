// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/partition.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file splits the flattened search space into one contiguous block per
// worker.

use std::ops::Range;

/// Static block partition of `0..total` into `workers` ranges.
///
/// The first `total % workers` blocks are one index longer. Workers past
/// `total` get empty ranges. Blocks are contiguous and cover `0..total`
/// exactly once.
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    let remainder = total % workers;

    let mut ranges = Vec::with_capacity(workers as usize);
    let mut start = 0u64;
    for i in 0..workers {
        let len = base + u64::from(i < remainder);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(ranges: &[Range<u64>], total: u64) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next);
            next = r.end;
        }
        assert_eq!(next, total);
    }

    #[test]
    fn test_even_split() {
        let ranges = partition(100, 4);
        assert_eq!(ranges, vec![0..25, 25..50, 50..75, 75..100]);
    }

    #[test]
    fn test_remainder_goes_to_first_blocks() {
        let ranges = partition(842_816, 5);
        assert_covers(&ranges, 842_816);
        let lens: Vec<u64> = ranges.iter().map(|r| r.end - r.start).collect();
        assert_eq!(lens, vec![168_564, 168_563, 168_563, 168_563, 168_563]);
    }

    #[test]
    fn test_more_workers_than_items() {
        let ranges = partition(3, 8);
        assert_eq!(ranges.len(), 8);
        assert_covers(&ranges, 3);
        assert_eq!(ranges.iter().filter(|r| r.is_empty()).count(), 5);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(partition(10, 0), vec![0..10]);
    }
}
