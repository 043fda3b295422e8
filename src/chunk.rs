use std::ops::Range;

use crate::scan::ByteScan;

/// Splits `data` into at most `workers` contiguous ranges, each ending one
/// past a newline so no record straddles a boundary. Only the final range may
/// lack the trailing newline (a file missing its last `'\n'`).
pub fn split_ranges(data: &[u8], workers: usize) -> Vec<Range<usize>> {
    if data.is_empty() {
        return Vec::new();
    }

    let workers = workers.max(1);
    let step = data.len() / workers;
    if step == 0 {
        return vec![0..data.len()];
    }

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;

    for worker in 0..workers {
        if start >= data.len() {
            break;
        }

        let end = if worker == workers - 1 {
            data.len()
        } else {
            let target = (start + step).min(data.len());
            match data[target..].find_byte(b'\n') {
                Some(newline) => target + newline + 1,
                None => data.len(),
            }
        };

        ranges.push(start..end);
        start = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cover(data: &[u8], workers: usize) {
        let ranges = split_ranges(data, workers);

        if data.is_empty() {
            assert!(ranges.is_empty());
            return;
        }

        assert!(!ranges.is_empty());
        assert!(ranges.len() <= workers.max(1));

        let mut expected_start = 0;
        for (i, range) in ranges.iter().enumerate() {
            assert_eq!(range.start, expected_start, "ranges must be contiguous");
            assert!(range.start < range.end);

            if i != ranges.len() - 1 {
                assert_eq!(data[range.end - 1], b'\n', "non-final range must end a line");
            }

            expected_start = range.end;
        }
        assert_eq!(expected_start, data.len(), "ranges must cover all input");
    }

    #[test]
    fn test_split_covers_exactly() {
        let data = b"Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8\nSt. John's;15.2\nCracow;12.6\n";

        for workers in 1..=10 {
            assert_cover(data, workers);
        }
    }

    #[test]
    fn test_split_without_trailing_newline() {
        let data = b"Hamburg;12.0\nBulawayo;8.9\nPalembang;38.8";

        for workers in 1..=6 {
            assert_cover(data, workers);
        }
    }

    #[test]
    fn test_split_empty() {
        assert!(split_ranges(b"", 4).is_empty());
    }

    #[test]
    fn test_split_more_workers_than_bytes() {
        let data = b"Ur;1.0\n";
        let ranges = split_ranges(data, 64);
        assert_eq!(ranges, vec![0..data.len()]);
    }

    #[test]
    fn test_split_single_long_line() {
        // A step that lands mid-line must push the boundary to the newline.
        let data = b"A;1.0\nSomewhere Far Beyond;23.4\nB;2.0\n";
        for workers in 1..=8 {
            assert_cover(data, workers);
        }
    }

    #[test]
    fn test_split_zero_workers_behaves_like_one() {
        let data = b"Ur;1.0\nUr;2.0\n";
        assert_eq!(split_ranges(data, 0), vec![0..data.len()]);
    }
}
