//! `nslc`: compiles a shader definition to JSON.

mod args;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use nsl_compiler::Compiler;

use args::{Config, Mode, USAGE};

fn main() -> Result<ExitCode> {
    let config = match Config::parse(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}\n\n{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match config.mode {
        Mode::Help => {
            print!("{USAGE}");
            Ok(ExitCode::SUCCESS)
        }
        Mode::Version => {
            println!("nslc {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Mode::DumpTokens => {
            let source = config.read_input()?;
            dump_tokens(&source)?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Compile => {
            let source = config.read_input()?;
            compile(&config, source)
        }
    }
}

fn dump_tokens(source: &str) -> Result<()> {
    let compiler = Compiler::new(source);
    let mut stdout = std::io::stdout().lock();
    for token in compiler.tokens() {
        writeln!(stdout, "{token}")?;
    }
    Ok(())
}

fn compile(config: &Config, source: String) -> Result<ExitCode> {
    let name = config.display_name();
    let mut compiler = Compiler::new(source);
    if let Err(err) = compiler.compile() {
        eprint!("{}", compiler.format_error(&err, &name));
        return Ok(ExitCode::FAILURE);
    }

    let json = serde_json::to_string_pretty(&compiler.into_output())
        .context("failed to serialize compiler output")?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(ExitCode::SUCCESS)
}
