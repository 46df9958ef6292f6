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

    // One row per country per year, a few indicator columns, and the
    // occasional empty cell so gap handling has something to chew on.
    let countries: [(&str, f64, f64); 5] = [
        ("Argentina", 2.1, 74.0),
        ("Brazil", 2.6, 73.0),
        ("Chile", 3.4, 77.0),
        ("Mexico", 2.3, 75.0),
        ("Uruguay", 2.8, 76.0),
    ];
    let years: Vec<i64> = (1990..=2023).collect();

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["year", "country", "gdp_growth", "life_expectancy"])
        .expect("Failed to write header");

    let mut row_count = 0usize;
    for &year in &years {
        for &(country, growth_base, life_base) in &countries {
            let t = (year - 1990) as f64;

            let growth = rng.gauss(growth_base, 1.8);
            let life = life_base + 0.15 * t + rng.gauss(0.0, 0.4);

            // ~5 % of the growth cells go missing.
            let growth_cell = if rng.next_f64() < 0.05 {
                String::new()
            } else {
                format!("{growth:.2}")
            };

            writer
                .write_record([
                    year.to_string(),
                    country.to_string(),
                    growth_cell,
                    format!("{life:.1}"),
                ])
                .expect("Failed to write row");
            row_count += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {row_count} rows to {output_path}");
}
