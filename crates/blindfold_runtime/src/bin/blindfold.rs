//! Blindfold CLI entry point.

use std::env;
use std::process::ExitCode;

use blindfold_runtime::{CliConfig, Repl, logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse(env::args().skip(1))?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("blindfold {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.log_level);

    let mut repl = Repl::new()?.with_phrasing(config.phrasing());

    for file in &config.files {
        for line in repl.translate_file(file)? {
            println!("{line}");
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    // Files already set the scene; skip the banner
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mBlindfold\x1b[0m - Spoken chess moves to notation and back

\x1b[1mUSAGE:\x1b[0m
    blindfold [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to translate line by line before starting the REPL
                  (- reads standard input)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Translate files and exit (no REPL)
    --no-pauses        Leave pause cues out of spoken output

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --debug            Log grammar selection and results
    --trace            Also log every matched section

\x1b[1mEXAMPLES:\x1b[0m
    blindfold                      Start interactive REPL
    blindfold -b moves.txt         Translate moves.txt and exit
    echo Nf3 | blindfold -b -      Translate standard input
    blindfold --trace              REPL with section-level logging

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show commands
    :vocab               List understood words
    :grammar             Show the grammar catalog
    :quit                Exit REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
