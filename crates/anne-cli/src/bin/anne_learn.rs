// anne-learn: Teach the engine from text files or stdin.
//
// Reads each FILE (or stdin when none is given), learns every word, and
// saves the snapshot. With --define, each whitespace- or comma-separated
// item is pinned as a definite word instead.
//
// Usage:
//   anne-learn [-s SNAPSHOT] [--define] [FILE...]
//
// Options:
//   -s, --snapshot PATH   Snapshot file to update
//       --define          Define words instead of counting them
//   -h, --help            Print help

use std::io::{self, Read};

fn main() {
    anne_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, mut args) =
        anne_cli::parse_snapshot_path(&args).unwrap_or_else(|e| anne_cli::fatal(&e));

    if anne_cli::wants_help(&args) {
        println!("anne-learn: Teach the spelling engine from text.");
        println!();
        println!("Usage: anne-learn [-s SNAPSHOT] [--define] [FILE...]");
        println!();
        println!("Learns every word of each FILE, or of stdin when no FILE is given,");
        println!("and saves the updated snapshot.");
        println!();
        println!("Options:");
        println!("  -s, --snapshot PATH   Snapshot file to update");
        println!("      --define          Define words instead of counting them");
        println!("  -h, --help            Print this help");
        return;
    }

    let define = anne_cli::take_flag(&mut args, "--define");
    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.as_str() != "-") {
        anne_cli::fatal(&format!("unknown option {unknown}"));
    }

    let path = anne_cli::resolve_snapshot_path(snapshot_path.as_deref());
    let mut anne = anne_cli::load_engine(&path).unwrap_or_else(|e| anne_cli::fatal(&e));
    let before = anne.word_count();

    let mut sources = Vec::new();
    if args.is_empty() || args.iter().all(|a| a == "-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .unwrap_or_else(|e| anne_cli::fatal(&format!("failed to read stdin: {e}")));
        sources.push(text);
    } else {
        for file in &args {
            let text = std::fs::read_to_string(file)
                .unwrap_or_else(|e| anne_cli::fatal(&format!("failed to read {file}: {e}")));
            sources.push(text);
        }
    }

    for text in &sources {
        if define {
            anne.import_text(text);
        } else {
            anne.learn(text);
        }
    }

    anne_cli::save_engine(&anne, &path).unwrap_or_else(|e| anne_cli::fatal(&e));
    println!(
        "{}: {} words ({} new)",
        path.display(),
        anne.word_count(),
        anne.word_count().saturating_sub(before)
    );
}
