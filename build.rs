//! Build script to generate embedded word lists
//!
//! Reads the word list files under `data/` and generates Rust source with
//! const arrays. Every entry must be five ASCII letters; a bad entry fails
//! the build with its line number.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words that can be chosen as the target in offline mode",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Words accepted as guesses in offline mode",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for &(input, output, const_name, doc) in LISTS {
        let source = render_word_list(input, const_name, doc);
        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_word_list(input_path: &str, const_name: &str, doc: &str) -> String {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut words = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_alphabetic()),
            "{input_path}:{}: '{word}' is not a five-letter word",
            line_no + 1
        );
        words.push(word.to_ascii_lowercase());
    }

    let mut out = String::new();
    writeln!(out, "// Generated from {input_path}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// {doc} ({} words)", words.len()).unwrap();
    writeln!(out, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(out, "    \"{word}\",").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in {const_name}").unwrap();
    writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
    out
}
