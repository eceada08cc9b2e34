use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use std::env;

use numcard::{assemble, CalcInput, Gender, DEFAULT_RULESET};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: numcard <NAME> <YYYY-MM-DD> [F|M|O|U]");
        eprintln!("Example: numcard YUCHIAOCHUN 1983-09-08 F");
        std::process::exit(1);
    }

    let name = args[1].clone();
    let birth = NaiveDate::parse_from_str(&args[2], "%Y-%m-%d")
        .with_context(|| format!("Invalid birth date '{}', expected YYYY-MM-DD", args[2]))?;
    let gender = match args.get(3).map(|g| g.as_str()) {
        None | Some("F") => Gender::F,
        Some("M") => Gender::M,
        Some("O") => Gender::O,
        Some("U") => Gender::U,
        Some(other) => bail!("Unknown gender code '{}', expected F, M, O or U", other),
    };

    // Names without any mapped letter (e.g. Chinese) are still served;
    // they degenerate to a zero card inside the engine.
    if name.trim().is_empty() {
        bail!("Name must not be empty");
    }

    let input = CalcInput {
        name,
        birth,
        gender,
        ruleset: DEFAULT_RULESET.to_string(),
    };

    // The clock is read here, never inside the engine.
    let today = Utc::now().date_naive();
    let card = assemble(&input, today);

    println!("🔮 Numerology Card");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Name:        {}", card.profile.name);
    println!("Birth:       {}  (age {})", card.profile.birth, card.profile.age);
    println!();
    println!("Life Path:   {}  ({})", card.core_numbers.life_path, card.profile.life_path_text);
    println!("Destiny:     {}  (raw {})", card.core_numbers.destiny, card.core_numbers.destiny_raw);
    println!("Soul:        {}  (raw {})", card.core_numbers.soul, card.core_numbers.soul_raw);
    println!("Personality: {}  (raw {})", card.core_numbers.personality, card.core_numbers.personality_raw);
    println!("Maturity:    {}  (raw {})", card.core_numbers.maturity, card.core_numbers.maturity_raw);
    println!();
    println!("Full card:");
    println!("{}", serde_json::to_string_pretty(&card)?);

    Ok(())
}
