use anyhow::{Context, Result};
use clap::Parser;
use secret_santa::{RandomSource, RngSource};
use std::path::PathBuf;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "David", "Emily", "Michael", "Sarah", "Chris", "Emma", "Alex", "Olivia",
    "Klaus", "Thomas", "Hubert",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Schmid", "Mustermann", "Musterfrau", "Billa", "Aldi",
];

const INITIALS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const EMAIL_DOMAIN: &str = "@example.com";

#[derive(Debug, Parser)]
#[command(name = "generate_participants")]
#[command(about = "Generates random participants, one 'name, email' per line")]
struct Args {
    /// Number of random names to generate
    #[arg(short, default_value = "10")]
    n: usize,

    /// Path of output file
    #[arg(long, default_value = "./random_names_and_emails.txt")]
    out: PathBuf,

    /// Seed for a reproducible list
    #[arg(long)]
    seed: Option<u64>,
}

fn pick<R: RandomSource, T: Copy>(rng: &mut R, items: &[T]) -> T {
    *rng.choose(items).expect("name lists are not empty")
}

fn random_name<R: RandomSource>(rng: &mut R) -> String {
    format!(
        "{} {}. {}",
        pick(rng, FIRST_NAMES),
        pick(rng, INITIALS),
        pick(rng, LAST_NAMES)
    )
}

/// "John A. Deere" becomes "john.a.deere" plus five random characters.
fn random_email<R: RandomSource>(rng: &mut R, name: &str) -> String {
    let local = name.to_lowercase().replace('.', "").replace(' ', ".");
    let alphanumeric: Vec<char> = ('a'..='z').chain('A'..='Z').chain('0'..='9').collect();
    let suffix: String = (0..5).map(|_| pick(rng, &alphanumeric)).collect();
    format!("{}{}{}", local, suffix, EMAIL_DOMAIN)
}

fn generate<R: RandomSource>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let name = random_name(rng);
            let email = random_email(rng, &name);
            format!("{}, {}", name, email)
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let mut content = generate(&mut rng, args.n).join("\n");
    content.push('\n');
    std::fs::write(&args.out, content)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!(
        "File '{}' created with {} random names and emails.",
        args.out.display(),
        args.n
    );
    Ok(())
}
