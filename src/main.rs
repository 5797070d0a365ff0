use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, Command};
use dialect_translator::{
    Dictionaries, Direction, Marker, ReplacementKind, SENTINEL, Translator, diff_highlight,
    load_dictionaries_from_dir,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("dialect-translator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text between American and British English")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("locale")
                .help("american-to-british or british-to-american")
                .default_value("american-to-british")
                .index(2),
        )
        .arg(
            Arg::new("dictionaries")
                .long("dictionaries")
                .short('d')
                .value_name("DIR")
                .help("Directory with the four dictionary JSON files (default: bundled)"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .short('p')
                .help("Print the translation without highlight markup")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("diff")
                .long("diff")
                .help("Highlight by diffing words against the input instead of inline")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("List every replacement")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let Some(text) = matches.get_one::<String>("text") else {
        return ExitCode::FAILURE;
    };
    let locale = matches
        .get_one::<String>("locale")
        .map(String::as_str)
        .unwrap_or("american-to-british");
    let plain = matches.get_flag("plain");
    let diff = matches.get_flag("diff");
    let verbose = matches.get_flag("verbose");

    let direction: Direction = match locale.parse() {
        Ok(direction) => direction,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let loaded;
    let dictionaries = match matches.get_one::<String>("dictionaries") {
        Some(dir) => match load_dictionaries_from_dir(Path::new(dir)) {
            Ok(d) => {
                loaded = d;
                &loaded
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Dictionaries::embedded(),
    };

    // Diff mode needs the unmarked translation to compare against
    let inline_marker = if plain || diff {
        Marker::none()
    } else {
        Marker::html()
    };
    let translator = match Translator::new(dictionaries) {
        Ok(t) => t.with_marker(inline_marker),
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let translation = translator.translate(text, direction);

    if verbose {
        eprintln!("🌍 {}", direction);
        for replacement in translation.replacements() {
            let kind = match replacement.kind {
                ReplacementKind::Term => "term",
                ReplacementKind::Time => "time",
            };
            eprintln!(
                "   [{}..{}] {}: \"{}\" → \"{}\"",
                replacement.range.start,
                replacement.range.end,
                kind,
                replacement.original,
                replacement.replacement
            );
        }
    }

    if translation.is_unchanged() {
        println!("{}", SENTINEL);
    } else if diff {
        let marker = if plain { Marker::none() } else { Marker::html() };
        println!("{}", diff_highlight(text, translation.text(), &marker));
    } else {
        println!("{}", translation.text());
    }

    ExitCode::SUCCESS
}
