use std::num::NonZeroUsize;
use std::thread;

use crate::chunk::split_ranges;
use crate::error::{Error, Result};
use crate::merge::merge;
use crate::parse::aggregate_range;
use crate::table::Table;

pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Partitions `data` into line-aligned ranges, aggregates each on its own
/// thread into a worker-local table, then merges the tables in worker index
/// order after the join barrier. Any worker error fails the whole run.
pub fn aggregate<'a>(data: &'a [u8], workers: usize, seed: u64) -> Result<Table<'a>> {
    let ranges = split_ranges(data, workers);

    let tables: Result<Vec<Table<'a>>> = thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                scope.spawn(move || -> Result<Table<'a>> {
                    let mut table = Table::new();
                    aggregate_range(&data[range.start..range.end], range.start, seed, &mut table)?;
                    Ok(table)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(Error::Invariant("worker thread panicked")))
            })
            .collect()
    });

    merge(tables?)
}
