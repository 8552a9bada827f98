//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! Without an argument the file is written to
//! `pilecap_core/src/equations/EQUATIONS.md` (relative to the workspace root).

use std::fs;
use std::path::PathBuf;

use pilecap_core::equations::generate_equations_markdown;

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pilecap_core/src/equations/EQUATIONS.md"));

    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
