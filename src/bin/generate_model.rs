use serde_json::json;

// Standalone generator for sample model artifacts so the app can run without
// the upstream training pipeline:
//   cargo run --bin generate_model
// writes pollution_model.json and model_columns.json to the working directory.

/// Pollutants in the model's trained output order, with a typical mean level
/// used as the prediction baseline (mg/L or the pollutant's natural unit).
const POLLUTANT_BASELINES: [(&str, f64); 9] = [
    ("NH4", 0.5),
    ("BSK5", 4.0),
    ("Suspended", 12.0),
    ("O2", 9.0),
    ("NO3", 4.2),
    ("NO2", 0.25),
    ("SO4", 60.0),
    ("PO4", 0.4),
    ("CL", 40.0),
];

const STATION_COUNT: usize = 22;
const REFERENCE_YEAR: f64 = 2010.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Columns: year first, then one indicator per station, matching the
    // id_<station> one-hot convention the app aligns against.
    let mut columns: Vec<String> = vec!["year".to_string()];
    columns.extend((1..=STATION_COUNT).map(|i| format!("id_{i}")));

    let mut coefficients: Vec<Vec<f64>> = Vec::with_capacity(POLLUTANT_BASELINES.len());
    let mut intercepts: Vec<f64> = Vec::with_capacity(POLLUTANT_BASELINES.len());

    for &(_, baseline) in &POLLUTANT_BASELINES {
        // A faint year trend plus a per-station offset, both scaled to the
        // pollutant's magnitude so predictions stay plausible.
        let year_slope = rng.gauss(0.0, 0.002) * baseline;

        let mut row = Vec::with_capacity(columns.len());
        row.push(year_slope);
        for _ in 0..STATION_COUNT {
            row.push(rng.gauss(0.0, 0.15) * baseline);
        }

        coefficients.push(row);
        // Anchor the baseline at the reference year so the year trend does
        // not blow up absolute levels.
        intercepts.push(baseline - year_slope * REFERENCE_YEAR);
    }

    let model = json!({
        "coefficients": coefficients,
        "intercepts": intercepts,
    });

    write_pretty("pollution_model.json", &model);
    write_pretty("model_columns.json", &json!(columns));

    println!(
        "Wrote pollution_model.json ({} outputs) and model_columns.json ({} columns)",
        POLLUTANT_BASELINES.len(),
        columns.len()
    );
}

fn write_pretty(path: &str, value: &serde_json::Value) {
    let text = serde_json::to_string_pretty(value).expect("serializing artifact");
    std::fs::write(path, text).unwrap_or_else(|e| panic!("writing {path}: {e}"));
}
