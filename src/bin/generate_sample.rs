use anyhow::{Context, Result};

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let teams = [
        "Rovers", "United", "City", "Athletic", "Wanderers", "Albion", "Rangers", "Town",
    ];
    let referees = ["A. Costa", "B. Lindqvist", "C. Okafor", "D. Marsh"];
    let notes = ["", "", "", "", "derby", "rain delay", "extra time"];

    let output_path = "sample.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating sample.csv")?;

    writer
        .write_record([
            "date",
            "home_team",
            "away_team",
            "home_goals",
            "away_goals",
            "attendance",
            "rating",
            "injury_time",
            "referee",
            "notes",
        ])
        .context("writing header row")?;

    let n_rows = 120;
    for i in 0..n_rows {
        let month = 1 + (i / 10) % 12;
        let day = 1 + (i * 3) % 28;
        let date = format!("2025-{month:02}-{day:02}");

        let home_idx = rng.below(teams.len() as u64) as usize;
        // Offset in 1..len keeps the away side distinct from the home side.
        let away_idx =
            (home_idx + 1 + rng.below(teams.len() as u64 - 1) as usize) % teams.len();
        let home = teams[home_idx];
        let away = teams[away_idx];

        let home_goals = rng.below(6).to_string();
        let away_goals = rng.below(5).to_string();

        // ~10% of attendance cells are blank so the classifier has missing
        // values to skip over.
        let attendance = if rng.next_f64() < 0.10 {
            String::new()
        } else {
            (10_000 + rng.below(50_000)).to_string()
        };

        let rating = format!("{:.1}", 4.0 + rng.next_f64() * 5.5);

        // Numeric-looking column with occasional junk: disqualified by the
        // classifier even though most rows parse.
        let injury_time = if rng.next_f64() < 0.05 {
            "n/a".to_string()
        } else {
            rng.below(9).to_string()
        };

        let referee = referees[rng.below(referees.len() as u64) as usize];
        let note = notes[rng.below(notes.len() as u64) as usize];

        writer
            .write_record([
                date.as_str(),
                home,
                away,
                home_goals.as_str(),
                away_goals.as_str(),
                attendance.as_str(),
                rating.as_str(),
                injury_time.as_str(),
                referee,
                note,
            ])
            .with_context(|| format!("writing row {i}"))?;
    }

    writer.flush().context("flushing sample.csv")?;
    println!("Wrote {n_rows} rows to {output_path}");
    Ok(())
}
