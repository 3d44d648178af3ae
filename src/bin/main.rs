use chandas_core::{ChandasEngine, ChandasError, Verification, Weight};
use crossterm::style::Stylize;
use std::io::Read;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let meter = match args.iter().find(|a| !a.starts_with("--")) {
        Some(m) => m.clone(),
        None => {
            eprintln!("usage: chandas_verify <meter> [--json]   (verse on stdin)");
            std::process::exit(2);
        }
    };

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .expect("failed to read stdin");

    let engine = ChandasEngine::new();
    match engine.verify(&text, &meter, None) {
        Ok(v) if json => {
            println!("{}", serde_json::to_string_pretty(&v).unwrap());
        }
        Ok(v) => print_report(&meter, &v),
        Err(ChandasError::UnknownMeter(name)) => {
            eprintln!("{} unknown meter '{}'", "error:".red(), name);
            eprintln!("known meters:");
            for template in engine.registry().templates() {
                eprintln!("  {}", template.name);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);
            std::process::exit(1);
        }
    }
}

fn print_report(meter: &str, v: &Verification) {
    println!("Target meter: {}", meter.to_string().bold());

    println!("\nSyllables:");
    for (syllable, weight) in v.syllables.iter().zip(&v.weights) {
        let letter = weight.letter().to_string();
        let colored = match weight {
            Weight::Guru => letter.red(),
            Weight::Laghu => letter.green(),
        };
        print!("{}({}) ", syllable, colored);
    }
    println!("\n\nPattern:\n{}", v.pattern);

    if !v.exact.is_empty() {
        println!("\nExact matches:");
        for name in &v.exact {
            println!("  {}", name.clone().green());
        }
    }
    if !v.partial.is_empty() {
        println!("\nPartial matches:");
        for name in &v.partial {
            println!("  {}", name.clone().yellow());
        }
    }
    if v.exact.is_empty() && v.partial.is_empty() {
        println!("\nNo meter in the catalog matches this pattern.");
    }

    let reward = format!("{:.1}", v.reward);
    let reward = if v.is_correct {
        reward.green().bold()
    } else if v.reward > 0.0 {
        reward.yellow()
    } else {
        reward.red()
    };
    println!("\nReward: {}", reward);
}
