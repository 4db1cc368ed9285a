// anne-suggest: Ranked correction candidates for words.
//
// Prints the candidates for each WORD (or each line of stdin), best first,
// with their normalized weight and raw frequency.
//
// Usage:
//   anne-suggest [-s SNAPSHOT] [-n N] [WORD...]
//
// Options:
//   -s, --snapshot PATH   Snapshot file to use
//   -n, --max N           Maximum candidates per word (default 5)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use anne_en::Anne;

fn main() {
    anne_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, args) =
        anne_cli::parse_snapshot_path(&args).unwrap_or_else(|e| anne_cli::fatal(&e));

    if anne_cli::wants_help(&args) {
        println!("anne-suggest: Show ranked correction candidates.");
        println!();
        println!("Usage: anne-suggest [-s SNAPSHOT] [-n N] [WORD...]");
        println!();
        println!("If WORD arguments are given, shows candidates for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -s, --snapshot PATH   Snapshot file to use");
        println!("  -n, --max N           Maximum candidates per word (default 5)");
        println!("  -h, --help            Print this help");
        return;
    }

    let (max, args) =
        anne_cli::take_value(&args, "--max", "-n").unwrap_or_else(|e| anne_cli::fatal(&e));
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let path = anne_cli::resolve_snapshot_path(snapshot_path.as_deref());
    let mut anne = anne_cli::load_engine(&path).unwrap_or_else(|e| anne_cli::fatal(&e));
    if let Some(max) = max {
        let max: usize = max
            .parse()
            .unwrap_or_else(|_| anne_cli::fatal(&format!("invalid count: {max}")));
        anne.set_max_suggestions(max);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str, anne: &Anne, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let candidates = anne.suggest(word);
        if candidates.is_empty() {
            let _ = writeln!(out, "{word}: (no candidates)");
            return;
        }
        let _ = writeln!(out, "{word}:");
        for candidate in &candidates {
            let _ = writeln!(
                out,
                "  {:<20} {:.4}  ({})",
                candidate.word, candidate.weight, candidate.frequency
            );
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &anne, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &anne, &mut out);
        }
    }
}
