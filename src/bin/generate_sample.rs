use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

/// Smooth trend plus a fast ripple and measurement noise, the texture of an
/// anisotropic-sample waveguide sweep.
fn trace(
    frequency: &[f64],
    base: f64,
    slope_per_ghz: f64,
    ripple_amp: f64,
    noise: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    frequency
        .iter()
        .map(|&f| {
            let ghz = f / 1e9;
            let trend = base + slope_per_ghz * (ghz - 8.2);
            let ripple = ripple_amp * (2.0 * std::f64::consts::PI * ghz * 2.5).sin();
            trend + ripple + rng.gauss(0.0, noise)
        })
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // X-band sweep: 8.2 → 12.4 GHz in 20 MHz steps.
    let frequency: Vec<f64> = (0..=210).map(|i| 8.2e9 + i as f64 * 2.0e7).collect();

    let permittivity = trace(&frequency, 2.54, 0.012, 0.03, 0.004, &mut rng);
    let loss_tangent = trace(&frequency, 0.018, 0.0006, 0.002, 0.0003, &mut rng);
    let s11 = trace(&frequency, -14.5, -0.35, 0.8, 0.12, &mut rng);
    let s21 = trace(&frequency, -0.6, -0.04, 0.15, 0.02, &mut rng);

    let headers = [
        "Frequency (Hz)",
        "Permittivity",
        "Loss Tangent",
        "S11 (dB)",
        "S21 (dB)",
    ];
    let columns = [&frequency, &permittivity, &loss_tangent, &s11, &s21];

    // ---- CSV ----
    let csv_path = "sample_sweep.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer.write_record(headers).expect("Failed to write header");
    for row in 0..frequency.len() {
        let record: Vec<String> = columns.iter().map(|col| col[row].to_string()).collect();
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(
        headers
            .iter()
            .map(|h| Field::new(*h, DataType::Float64, false))
            .collect::<Vec<Field>>(),
    ));
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|col| Arc::new(Float64Array::from((*col).clone())) as ArrayRef)
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).expect("Failed to create RecordBatch");

    let parquet_path = "sample_sweep.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} frequency points to {csv_path} and {parquet_path}",
        frequency.len()
    );
}
