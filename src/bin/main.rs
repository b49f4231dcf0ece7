use brand_core::persistence::OverrideStore;
use brand_core::{Lexicon, NormalizationEngine, NormalizeOptions};
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

const OVERRIDES_PATH: &str = "additional_brands.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OVERRIDES_PATH));
    let mut store = OverrideStore::open(path);
    let mut engine = build_engine(&store);

    println!("Brand normalizer. Type text to normalize, ':help' for commands, 'exit' to save and quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);

        match line.trim() {
            "exit" => break,
            "" => continue,
            ":help" => print_help(),
            ":dict" => {
                if store.overrides().is_empty() {
                    println!("{}", "no overrides yet".dark_grey());
                }
                for (term, localized) in store.overrides().iter() {
                    println!("{},{}", term, localized);
                }
            }
            ":save" => match store.save() {
                Ok(()) => println!(
                    "{} {}",
                    "saved to".green(),
                    store.path().display()
                ),
                Err(e) => println!("{} {}", "save failed:".red(), e),
            },
            ":bulk" => {
                println!("Paste one 'term,localized' pair per line, finish with a single '.'");
                let mut pasted = String::new();
                loop {
                    let mut bulk_line = String::new();
                    if stdin().read_line(&mut bulk_line).unwrap() == 0 {
                        break;
                    }
                    if bulk_line.trim() == "." {
                        break;
                    }
                    pasted.push_str(&bulk_line);
                }
                let parsed = Lexicon::parse_bulk(&pasted);
                println!("{} {} entries", "replacing overrides with".green(), parsed.len());
                store.replace(parsed);
                engine = build_engine(&store);
            }
            cmd if cmd.starts_with(":add ") => match cmd[5..].split_once(',') {
                Some((term, localized)) => {
                    store.insert(term.trim(), localized.trim());
                    engine = build_engine(&store);
                    println!("{}", "added".green());
                }
                None => println!("{}", "expected ':add term,localized'".yellow()),
            },
            cmd if cmd.starts_with(':') => {
                println!("{} {}", "unknown command".yellow(), cmd);
            }
            _ => {
                println!("{}", engine.normalize(line).bold());
            }
        }
    }

    println!("\nSaving overrides...");
    if let Err(e) = store.save() {
        eprintln!("[ERROR] Could not save overrides: {}", e);
    } else {
        println!("Overrides saved to '{}'", store.path().display());
    }
}

fn build_engine(store: &OverrideStore) -> NormalizationEngine {
    NormalizationEngine::new(
        &store.merged_with_builtin(),
        &Lexicon::auto_translate(),
        NormalizeOptions::default(),
    )
}

fn print_help() {
    println!("  <text>                normalize a line of text");
    println!("  :add term,localized   add or update one override");
    println!("  :bulk                 replace all overrides from pasted lines");
    println!("  :dict                 list the current overrides");
    println!("  :save                 write the overrides file now");
    println!("  exit                  save and quit");
}
