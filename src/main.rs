use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use pixlex::{init_tracing, lexer::lexer::tokenize, render_error};

const SAMPLE_PROGRAM: &str = "let x: int = 42; let y: float = 3.14; let color: colour = #FFAABB; if (x < y) { __print x; }";

/// Prints the tokens of a pixel-graphics program, one `Type | Value` pair per line.
#[derive(Parser, Debug)]
#[command(name = "pixlex", version, about)]
struct Args {
    /// Source file to scan. Scans a built-in sample program when omitted.
    file: Option<PathBuf>,

    /// Scan this text instead of a file.
    #[arg(long, conflicts_with = "file")]
    source: Option<String>,

    /// Do not print the timing line.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let (source, file_name) = if let Some(source) = args.source {
        (source, String::from("shell"))
    } else if let Some(path) = args.file {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match read_to_string(&path) {
            Ok(contents) => (contents, file_name),
            Err(err) => {
                eprintln!("Error: failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        (String::from(SAMPLE_PROGRAM), String::from("sample"))
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        println!("Tokenized in {:?}", start.elapsed());
    }

    for token in &tokens {
        println!("{}", token);
    }

    ExitCode::SUCCESS
}
