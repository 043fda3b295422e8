use crate::table::{Station, Table};

/// Renders the final record: stations sorted by name bytes, each as
/// `name=min/mean/max` with one fractional digit, joined by `", "` inside
/// braces, with a single trailing newline.
pub fn render(table: &Table) -> Vec<u8> {
    let mut stations: Vec<&Station> = table.stations().collect();
    stations.sort_unstable_by_key(|station| station.name);

    let mut out = Vec::with_capacity(stations.len() * 32 + 3);
    out.push(b'{');

    for (i, station) in stations.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b", ");
        }

        out.extend_from_slice(station.name);
        out.push(b'=');
        push_decidegrees(&mut out, station.min as i64);
        out.push(b'/');
        push_decidegrees(&mut out, station.mean());
        out.push(b'/');
        push_decidegrees(&mut out, station.max as i64);
    }

    out.extend_from_slice(b"}\n");
    out
}

/// Writes decidegrees with exactly one fractional digit: -905 -> "-90.5",
/// 0 -> "0.0". No positive sign, no padding.
pub fn push_decidegrees(out: &mut Vec<u8>, decidegrees: i64) {
    let mut value = decidegrees;

    if value < 0 {
        out.push(b'-');
        value = -value;
    }

    let whole = value / 10;
    if whole >= 10 {
        out.push(b'0' + (whole / 10) as u8);
    }
    out.push(b'0' + (whole % 10) as u8);
    out.push(b'.');
    out.push(b'0' + (value % 10) as u8);
}
