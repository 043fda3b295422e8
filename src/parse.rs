use crate::error::{Error, Result};
use crate::scan::ByteScan;
use crate::table::{hash_name, Table};

pub const MAX_NAME_LEN: usize = 100;

/// Parses `d.d` / `dd.d`, optionally `-`-prefixed, into signed decidegrees.
#[inline(always)]
pub fn parse_decidegrees(bytes: &[u8]) -> Option<i16> {
    match bytes {
        [b'-', magnitude @ ..] => parse_magnitude(magnitude).map(|v| -v),
        _ => parse_magnitude(bytes),
    }
}

#[inline(always)]
fn parse_magnitude(bytes: &[u8]) -> Option<i16> {
    match *bytes {
        [units, b'.', tenths] if units.is_ascii_digit() && tenths.is_ascii_digit() => {
            Some((units - b'0') as i16 * 10 + (tenths - b'0') as i16)
        }
        [tens, units, b'.', tenths]
            if tens.is_ascii_digit() && units.is_ascii_digit() && tenths.is_ascii_digit() =>
        {
            Some((tens - b'0') as i16 * 100 + (units - b'0') as i16 * 10 + (tenths - b'0') as i16)
        }
        _ => None,
    }
}

/// Consumes one range of complete `name;value\n` records (the final newline
/// may be absent at end of input) and accumulates into the worker's table.
/// `base` is the range's absolute offset, used for error reporting only.
///
/// Any record outside the grammar fails the whole run; nothing is skipped.
pub fn aggregate_range<'a>(
    data: &'a [u8],
    base: usize,
    seed: u64,
    table: &mut Table<'a>,
) -> Result<()> {
    let mut pos = 0;

    while pos < data.len() {
        let rest = &data[pos..];

        let semi = rest.find_byte(b';').ok_or(Error::Parse {
            offset: base + pos,
            reason: "record has no ';' separator",
        })?;

        let name = &rest[..semi];
        if name.find_byte(b'\n').is_some() {
            return Err(Error::Parse {
                offset: base + pos,
                reason: "record has no ';' separator",
            });
        }
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(Error::Parse {
                offset: base + pos,
                reason: "station name must be 1..=100 bytes",
            });
        }

        let value_start = semi + 1;
        let value_end = match rest[value_start..].find_byte(b'\n') {
            Some(newline) => value_start + newline,
            None => rest.len(),
        };

        let temp = parse_decidegrees(&rest[value_start..value_end]).ok_or(Error::Parse {
            offset: base + pos + value_start,
            reason: "temperature does not match -?d?d.d",
        })?;

        let hash = hash_name(seed, name);
        table.insert_or_update(hash, name, temp)?;

        pos += value_end + 1;
    }

    Ok(())
}
