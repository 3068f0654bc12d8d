//! CLI tool that extracts the text of a PDF chosen through a file dialog.
//!
//! The text of every page is written, separated by blank lines, to
//! `output/<title>.txt`.

use extracttextpdf::{
    Conversion, ConvertError, Converter, ConverterConfig, NativeFileDialog, Result,
};
use std::{env, process};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_usage(args.first().map(String::as_str).unwrap_or("extracttextpdf"));
        process::exit(0);
    }

    let config = ConverterConfig::default();
    let selector = NativeFileDialog::from_config(&config);
    let converter = Converter::new(config);

    process::exit(report(converter.run(&selector)));
}

/// Print the outcome of a run and return the process exit status.
fn report(result: Result<Conversion>) -> i32 {
    let (code, message) = summarize(&result);
    if code == 0 {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
    code
}

fn summarize(result: &Result<Conversion>) -> (i32, String) {
    match result {
        Ok(conversion) => (
            0,
            format!(
                "✔ Text successfully written to '{}'.",
                conversion.output_path.display()
            ),
        ),
        Err(ConvertError::NoFileSelected) => (1, "⚠️ No file selected, aborting.".into()),
        Err(e) => (1, format!("❌ Error: {e}")),
    }
}

fn print_usage(program_name: &str) {
    println!("📄 extracttextpdf - PDF to plain text");
    println!();
    println!("USAGE:");
    println!("    {program_name}");
    println!();
    println!("A file dialog asks for the PDF. Its text is written to");
    println!("'output/<title>.txt', where <title> is the document's metadata");
    println!("title (or the PDF's file name) reduced to letters, digits,");
    println!("spaces, '-' and '_'.");
    println!();
    println!("Set RUST_LOG=debug for progress details.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn success_exits_zero() {
        let conversion = Conversion {
            source: PathBuf::from("in.pdf"),
            title: Some("Notes".into()),
            page_count: 2,
            output_path: PathBuf::from("output/Notes.txt"),
        };
        let result = Ok(conversion);

        let (_, message) = summarize(&result);
        assert!(message.contains("output/Notes.txt"), "{message}");
        assert_eq!(report(result), 0);
    }

    #[test]
    fn cancelled_selection_exits_one_with_warning() {
        let (_, message) = summarize(&Err(ConvertError::NoFileSelected));
        assert!(message.contains("No file selected"), "{message}");
        assert_eq!(report(Err(ConvertError::NoFileSelected)), 1);
    }

    #[test]
    fn fatal_error_exits_one_with_diagnostic() {
        let err = || ConvertError::InvalidPdf("no page tree".into());

        let (_, message) = summarize(&Err(err()));
        assert!(message.starts_with("❌ Error:"), "{message}");
        assert!(message.contains("no page tree"), "{message}");
        assert_eq!(report(Err(err())), 1);
    }
}
