//! Benchmark utilities and helpers.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_common::DataType;
use tabula_table::Table;

/// Generates random string data for benchmarks.
pub fn random_string(rng: &mut StdRng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates random `(name, age, score)` rows as strings.
pub fn generate_student_rows(count: usize) -> Vec<[String; 3]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let name = random_string(&mut rng, 12);
            let age: i64 = rng.gen_range(18..80);
            let score: f64 = rng.gen_range(0.0..4.0);
            [name, age.to_string(), score.to_string()]
        })
        .collect()
}

/// Builds a `(name, age, score)` table holding `count` random rows.
pub fn student_table(count: usize) -> Table {
    let mut table = Table::new();
    table.add_column("name", DataType::Text);
    table.add_column("age", DataType::Integer);
    table.add_column("score", DataType::Real);
    for row in generate_student_rows(count) {
        table
            .add_row(&row)
            .expect("generated rows match the schema");
    }
    table
}
