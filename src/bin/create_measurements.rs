use std::env;
use std::fs;
use std::io::{BufWriter, Write};

use rand::Rng;
use rand_distr::{Distribution, Normal};

const BUILTIN_STATIONS: &[(&str, f64)] = &[
    ("Abha", 18.0),
    ("Accra", 26.4),
    ("Adelaide", 17.3),
    ("Amsterdam", 10.2),
    ("Anchorage", 2.8),
    ("Athens", 19.2),
    ("Auckland", 15.2),
    ("Baghdad", 22.8),
    ("Bangkok", 28.6),
    ("Bilbao", 14.7),
    ("Bulawayo", 18.9),
    ("Cape Town", 16.2),
    ("Cracow", 9.3),
    ("Dakar", 24.0),
    ("Hamburg", 9.7),
    ("Havana", 25.2),
    ("Ho Chi Minh City", 27.4),
    ("Kyiv", 8.4),
    ("La Paz", 8.6),
    ("Lisbon", 17.5),
    ("Mexico City", 17.5),
    ("Nuuk", -1.4),
    ("Oslo", 5.7),
    ("Ouagadougou", 28.3),
    ("Palembang", 27.3),
    ("Perth", 18.7),
    ("Reykjavik", 4.3),
    ("Riyadh", 26.0),
    ("San Jose", 16.4),
    ("St. John's", 5.0),
    ("Tokyo", 15.4),
    ("Ulaanbaatar", -0.4),
    ("Wellington", 12.9),
    ("Yakutsk", -8.8),
    ("Zagreb", 10.7),
];

struct StationModel {
    name: String,
    temps: Normal<f64>,
}

impl StationModel {
    fn new(name: &str, mean: f64) -> Self {
        Self {
            name: name.to_string(),
            temps: Normal::new(mean, 10.0)
                .unwrap_or_else(|_| panic!("could not build distribution for {name}")),
        }
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        self.temps.sample(rng).clamp(-99.9, 99.9)
    }
}

fn load_stations(path: &str) -> Vec<StationModel> {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("could not read {path}: {err}"))
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(|line| {
            let (name, mean) = line
                .split_once(';')
                .unwrap_or_else(|| panic!("expected name;mean, got: {line}"));
            let mean: f64 = mean
                .parse()
                .unwrap_or_else(|_| panic!("bad mean for {name}: {mean}"));
            StationModel::new(name, mean)
        })
        .collect()
}

fn main() {
    let rows: u64 = env::args()
        .nth(1)
        .expect("usage: create_measurements <rows> [stations-file]")
        .replace('_', "")
        .parse()
        .expect("row count must be an integer");

    let stations: Vec<StationModel> = match env::args().nth(2) {
        Some(path) => load_stations(&path),
        None => BUILTIN_STATIONS
            .iter()
            .map(|&(name, mean)| StationModel::new(name, mean))
            .collect(),
    };

    let mut rng = rand::rng();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..rows {
        let station = &stations[rng.random_range(0..stations.len())];
        let temp = station.sample(&mut rng);
        writeln!(out, "{};{:.1}", station.name, temp).expect("write failed");
    }

    out.flush().expect("flush failed");
}
