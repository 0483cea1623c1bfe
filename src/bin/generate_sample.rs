use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Booster generations in flight order: (version prefix, category, serial base,
/// success probability, typical payload ceiling in kg).
const GENERATIONS: [(&str, &str, u32, f64, f64); 5] = [
    ("F9 v1.0", "v1.0", 3, 0.2, 700.0),
    ("F9 v1.1", "v1.1", 1003, 0.4, 4500.0),
    ("F9 FT", "FT", 1019, 0.75, 9600.0),
    ("F9 B4", "B4", 1039, 0.7, 7000.0),
    ("F9 B5", "B5", 1046, 0.9, 9600.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

const LAUNCHES_PER_GENERATION: usize = 12;

fn generate_rows(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut flight_number = 1;

    for &(prefix, category, serial_base, success_rate, max_payload) in &GENERATIONS {
        for i in 0..LAUNCHES_PER_GENERATION {
            let site = rng.pick(&SITES[..]).to_string();
            let payload_mass = (rng.next_f64() * max_payload).round();
            let class = i64::from(rng.next_f64() < success_rate);
            let serial = if category == "v1.0" {
                format!("B{:04}", serial_base + i as u32)
            } else {
                format!("B{}.{}", serial_base + i as u32 / 2, 1 + i % 2)
            };
            rows.push(Row {
                flight_number,
                site,
                class,
                payload_mass,
                booster_version: format!("{prefix}  {serial}"),
                booster_category: category.to_string(),
            });
            flight_number += 1;
        }
    }
    rows
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV output")?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn to_batch(rows: &[Row]) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.site))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| &r.booster_version),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| &r.booster_category),
            )),
        ],
    )
    .context("building record batch")?;
    Ok(batch)
}

fn write_parquet(batch: &RecordBatch, path: &str) -> Result<()> {
    let file = std::fs::File::create(path).context("creating Parquet output")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    let csv_path = "sample_launches.csv";
    let parquet_path = "sample_launches.parquet";

    write_csv(&rows, csv_path)?;
    let batch = to_batch(&rows)?;
    write_parquet(&batch, parquet_path)?;

    println!("{}", pretty_format_batches(&[batch.slice(0, 5)])?);
    println!(
        "Wrote {} launches to {csv_path} and {parquet_path}",
        rows.len()
    );
    Ok(())
}
