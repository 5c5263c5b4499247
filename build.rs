//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Input file, output file, constant name and doc line for each list
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Italian words that can be chosen as the solution",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Italian words accepted as guesses",
    ),
];

fn main() {
    let Some(out_dir) = env::var_os("OUT_DIR") else {
        panic!("OUT_DIR is not set; run through cargo");
    };

    for (input, output, const_name, doc_comment) in LISTS {
        let output = Path::new(&out_dir).join(output);
        if let Err(e) = generate_word_list(input, &output, const_name, doc_comment) {
            panic!("Failed to generate {const_name} from {input}: {e}");
        }
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    // Skip blanks and `#` comments so the data files can be annotated
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({count} words)")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase())?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;
    output.flush()
}
