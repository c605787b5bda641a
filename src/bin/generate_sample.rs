use anyhow::{Context, Result};
use serde::Serialize;

/// One output row of `roster_info.csv`.
#[derive(Debug, Serialize)]
struct SampleRow {
    week: u32,
    player_name: String,
    jersey_number: u32,
    position: &'static str,
    headshot_url: String,
}

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}

const FIRST: &[&str] = &[
    "Marcus", "Devin", "Tyler", "Andre", "Jalen", "Chris", "Nate", "Omar", "Luis", "Sam",
];
const LAST: &[&str] = &[
    "Johnson", "Williams", "Brown", "Davis", "Miller", "Moore", "Taylor", "Jackson", "Harris",
    "Lewis",
];

/// Position → players per week.
const DEPTH: &[(&str, usize)] = &[
    ("QB", 2), ("RB", 3), ("WR", 5), ("TE", 2), ("OL", 8),
    ("DL", 6), ("LB", 5), ("DB", 7),
    ("K", 1), ("P", 1), ("LS", 1),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "roster_info.csv";
    let mut wtr = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for week in 1..=4u32 {
        let mut jersey = 1u32;
        for &(position, count) in DEPTH {
            for _ in 0..count {
                // Suffixes produce embedded commas, exercising quoted fields.
                let mut player_name = format!("{} {}", FIRST[rng.below(FIRST.len())], LAST[rng.below(LAST.len())]);
                if rng.chance(10) {
                    player_name = format!("{player_name}, Jr.");
                }
                let headshot_url = if rng.chance(70) {
                    format!("https://picsum.photos/seed/{position}{jersey}/48")
                } else {
                    String::new()
                };
                wtr.serialize(SampleRow {
                    week,
                    player_name,
                    jersey_number: jersey,
                    position,
                    headshot_url,
                })
                .context("writing sample row")?;
                jersey += 1;
                rows += 1;
            }
        }
    }
    wtr.flush().context("flushing sample roster")?;

    println!("Wrote {rows} roster rows for 4 weeks to {output_path}");
    Ok(())
}
