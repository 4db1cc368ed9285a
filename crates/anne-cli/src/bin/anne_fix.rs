// anne-fix: Correct text from stdin.
//
// Reads stdin line by line and prints each line with its misspellings
// corrected. With --learn, every line is also learned (as written) and the
// snapshot is saved at the end.
//
// Usage:
//   anne-fix [-s SNAPSHOT] [--learn] [--collapse-whitespace]
//
// Options:
//   -s, --snapshot PATH       Snapshot file to use
//       --learn               Learn from the input and save the snapshot
//       --collapse-whitespace Join words with single spaces
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use anne_en::Spacing;

fn main() {
    anne_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, mut args) =
        anne_cli::parse_snapshot_path(&args).unwrap_or_else(|e| anne_cli::fatal(&e));

    if anne_cli::wants_help(&args) {
        println!("anne-fix: Correct misspellings in text read from stdin.");
        println!();
        println!("Usage: anne-fix [-s SNAPSHOT] [--learn] [--collapse-whitespace]");
        println!();
        println!("Options:");
        println!("  -s, --snapshot PATH       Snapshot file to use");
        println!("      --learn               Learn from the input and save the snapshot");
        println!("      --collapse-whitespace Join words with single spaces");
        println!("  -h, --help                Print this help");
        return;
    }

    let learn = anne_cli::take_flag(&mut args, "--learn");
    let collapse = anne_cli::take_flag(&mut args, "--collapse-whitespace");
    if let Some(unknown) = args.first() {
        anne_cli::fatal(&format!("unexpected argument {unknown}"));
    }

    let path = anne_cli::resolve_snapshot_path(snapshot_path.as_deref());
    let mut anne = anne_cli::load_engine(&path).unwrap_or_else(|e| anne_cli::fatal(&e));
    if collapse {
        anne.set_spacing(Spacing::Collapse);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let fixed = if learn {
            anne.fix_and_learn(&line)
        } else {
            anne.fix(&line)
        };
        let _ = writeln!(out, "{fixed}");
    }
    let _ = out.flush();

    if learn {
        anne_cli::save_engine(&anne, &path).unwrap_or_else(|e| anne_cli::fatal(&e));
    }
}
