use crate::error::Result;
use crate::table::Table;

/// Folds all worker tables into the first one. Callers pass tables in worker
/// index order, which keeps the fold deterministic for a given input and
/// seed.
pub fn merge<'a>(tables: Vec<Table<'a>>) -> Result<Table<'a>> {
    let mut tables = tables.into_iter();

    let Some(mut merged) = tables.next() else {
        return Ok(Table::new());
    };

    for table in tables {
        for station in table.into_stations() {
            merged.absorb(station)?;
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::aggregate_range;
    use crate::table::{hash_name, FNV_OFFSET};

    fn parsed(data: &[u8]) -> Table<'_> {
        let mut table = Table::with_capacity(64);
        aggregate_range(data, 0, FNV_OFFSET, &mut table).unwrap();
        table
    }

    #[test]
    fn test_merge_none() {
        assert!(merge(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_merge_matches_single_range_parse() {
        let whole = b"Ur;1.0\nOslo;-3.2\nUr;2.0\nOslo;4.4\nUr;3.0\n";
        let expected = parsed(whole);

        let split = vec![
            parsed(b"Ur;1.0\nOslo;-3.2\n"),
            parsed(b"Ur;2.0\n"),
            parsed(b"Oslo;4.4\nUr;3.0\n"),
        ];
        let merged = merge(split).unwrap();

        assert_eq!(merged.len(), expected.len());
        for station in expected.stations() {
            let got = merged
                .get(hash_name(FNV_OFFSET, station.name), station.name)
                .unwrap();
            assert_eq!(got, station);
        }
    }

    #[test]
    fn test_merge_keeps_disjoint_stations() {
        let merged = merge(vec![parsed(b"Asmara;20.1\n"), parsed(b"Bilbao;-4.0\n")]).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged
                .get(hash_name(FNV_OFFSET, b"Asmara"), b"Asmara")
                .unwrap()
                .total,
            201
        );
        assert_eq!(
            merged
                .get(hash_name(FNV_OFFSET, b"Bilbao"), b"Bilbao")
                .unwrap()
                .total,
            -40
        );
    }
}
