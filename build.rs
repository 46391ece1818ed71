//! Build script that embeds `data/words.txt`
//!
//! Lines are trimmed and lowercased. Lines that are not five ASCII letters
//! are skipped with a cargo warning and repeats are dropped, so the
//! generated `WORDS` table is always clean.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        if word.len() != 5 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            println!("cargo:warning={SOURCE}:{}: skipping '{word}'", line_no + 1);
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    let mut source = String::new();
    let _ = writeln!(source, "/// Default candidate words ({} words)", words.len());
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of words in `WORDS`\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));
    let dest = Path::new(&out_dir).join("words.rs");
    fs::write(&dest, source).unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));
}
