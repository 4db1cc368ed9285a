// anne-cli: shared utilities for CLI tools.
//
// The engine itself does no I/O. These helpers find, load, and save the
// snapshot file on behalf of the binaries.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anne_en::Anne;
use log::info;
use tempfile::NamedTempFile;

/// Environment variable naming the snapshot file.
pub const SNAPSHOT_ENV: &str = "ANNE_SNAPSHOT_PATH";

/// Snapshot location under the home directory.
const HOME_SNAPSHOT: &str = ".anne/snapshot.json";

/// Snapshot file name in the current directory.
const LOCAL_SNAPSHOT: &str = "anne.json";

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}

/// Decide which snapshot file to use.
///
/// Search order:
/// 1. `snapshot_path` argument (if provided)
/// 2. `ANNE_SNAPSHOT_PATH` environment variable
/// 3. `~/.anne/snapshot.json`, if it exists
/// 4. `./anne.json`, if it exists
///
/// When neither 3 nor 4 exists, new snapshots go to the home location (or to
/// `./anne.json` when there is no home directory).
pub fn resolve_snapshot_path(snapshot_path: Option<&str>) -> PathBuf {
    if let Some(p) = snapshot_path {
        return PathBuf::from(p);
    }
    if let Ok(env_path) = std::env::var(SNAPSHOT_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    let home = home_dir().map(|h| h.join(HOME_SNAPSHOT));
    let local = PathBuf::from(LOCAL_SNAPSHOT);
    match home {
        Some(home) if home.is_file() => home,
        _ if local.is_file() => local,
        Some(home) => home,
        None => local,
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Load an engine from a snapshot file. A missing file gives an empty engine.
pub fn load_engine(path: &Path) -> Result<Anne, String> {
    let mut anne = Anne::new();
    if !path.is_file() {
        info!("no snapshot at {}, starting empty", path.display());
        return Ok(anne);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    anne.from_json(&text)
        .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
    Ok(anne)
}

/// Write the engine's snapshot to `path`.
///
/// The snapshot is written to a temporary file in the same directory and
/// renamed over the target, so readers never see a partial file.
pub fn save_engine(anne: &Anne, path: &Path) -> Result<(), String> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;

    let json = anne
        .to_json()
        .map_err(|e| format!("failed to encode snapshot: {e}"))?;

    let temp_file = NamedTempFile::new_in(parent)
        .map_err(|e| format!("failed to create temporary file in {}: {}", parent.display(), e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer
            .write_all(json.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| format!("failed to write snapshot: {e}"))?;
    }
    temp_file
        .persist(path)
        .map_err(|e| format!("failed to save {}: {}", path.display(), e))?;

    info!("saved {} words to {}", anne.word_count(), path.display());
    Ok(())
}

/// Parse a `--snapshot=PATH` or `-s PATH` argument from command line args.
///
/// Returns `(snapshot_path, remaining_args)`.
pub fn parse_snapshot_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    take_value(args, "--snapshot", "-s")
}

/// Remove one `--long=VALUE`, `--long VALUE`, or `-short VALUE` option from
/// `args`. The last occurrence wins.
pub fn take_value(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let prefix = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Remove a boolean flag from `args`, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anne_en::Weight;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn snapshot_path_short_and_long_forms() {
        let (path, rest) = parse_snapshot_path(&args(&["-s", "a.json", "word"])).unwrap();
        assert_eq!(path.as_deref(), Some("a.json"));
        assert_eq!(rest, args(&["word"]));

        let (path, rest) = parse_snapshot_path(&args(&["--snapshot=b.json"])).unwrap();
        assert_eq!(path.as_deref(), Some("b.json"));
        assert!(rest.is_empty());

        let (path, _) = parse_snapshot_path(&args(&["--snapshot", "c.json"])).unwrap();
        assert_eq!(path.as_deref(), Some("c.json"));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse_snapshot_path(&args(&["word", "-s"])).is_err());
    }

    #[test]
    fn take_flag_removes_every_occurrence() {
        let mut list = args(&["--learn", "x", "--learn"]);
        assert!(take_flag(&mut list, "--learn"));
        assert_eq!(list, args(&["x"]));
        assert!(!take_flag(&mut list, "--learn"));
    }

    #[test]
    fn explicit_path_wins() {
        assert_eq!(
            resolve_snapshot_path(Some("/tmp/explicit.json")),
            PathBuf::from("/tmp/explicit.json")
        );
    }

    #[test]
    fn missing_snapshot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let anne = load_engine(&dir.path().join("absent.json")).unwrap();
        assert_eq!(anne.word_count(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/snapshot.json");

        let mut anne = Anne::new();
        anne.learn("hello hello world").define("receive");
        save_engine(&anne, &path).unwrap();

        let loaded = load_engine(&path).unwrap();
        assert_eq!(loaded.frequency("hello"), Weight::Finite(2));
        assert_eq!(loaded.frequency("receive"), Weight::Definite);
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        let err = load_engine(&path).err().unwrap();
        assert!(err.contains("bad.json"));
    }
}
