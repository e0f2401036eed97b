//! Command-line options in `-name[=value]` form.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const USAGE: &str = "\
Usage: nslc [options] <input>

Compiles a shader definition and writes its metadata and stage sources as JSON.

Options:
  -help, -h, -?    Print this help and exit
  -version         Print the version and exit
  -verbose         Log compiler progress to stderr
  -stdin           Read the definition from standard input
  -tokens          Print the token stream instead of compiling
  -o=<path>        Write the JSON output to <path> instead of stdout
";

/// Where the definition is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// What the tool does with the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compile,
    DumpTokens,
    Help,
    Version,
}

/// Parsed command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub verbose: bool,
    pub input: Option<InputSource>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parses the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self {
            mode: Mode::Compile,
            verbose: false,
            input: None,
            output: None,
        };
        let mut stdin = false;
        let mut file = None;

        for arg in args {
            let arg = arg.into();
            let Some(option) = arg.strip_prefix('-') else {
                if file.replace(PathBuf::from(&arg)).is_some() {
                    bail!("more than one input file given");
                }
                continue;
            };

            let (name, value) = match option.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (option, None),
            };

            match (name, value) {
                ("help" | "h" | "?", None) => config.mode = Mode::Help,
                ("version", None) => {
                    if config.mode != Mode::Help {
                        config.mode = Mode::Version;
                    }
                }
                ("verbose", None) => config.verbose = true,
                ("stdin", None) => stdin = true,
                ("tokens", None) => {
                    if config.mode == Mode::Compile {
                        config.mode = Mode::DumpTokens;
                    }
                }
                ("o", Some(path)) if !path.is_empty() => config.output = Some(PathBuf::from(path)),
                ("o", _) => bail!("option -o needs a path, as in -o=<path>"),
                ("help" | "h" | "?" | "version" | "verbose" | "stdin" | "tokens", Some(_)) => {
                    bail!("option -{} takes no value", name)
                }
                _ => bail!("unknown option: {}", arg),
            }
        }

        config.input = match (stdin, file) {
            (true, Some(path)) => {
                bail!("cannot read both stdin and {}", path.display())
            }
            (true, None) => Some(InputSource::Stdin),
            (false, Some(path)) => Some(InputSource::File(path)),
            (false, None) => None,
        };

        if matches!(config.mode, Mode::Compile | Mode::DumpTokens) && config.input.is_none() {
            bail!("no input given; pass a file or -stdin");
        }

        Ok(config)
    }

    /// Reads the whole definition from the configured input.
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(InputSource::File(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Some(InputSource::Stdin) => {
                std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
            }
            None => bail!("no input given; pass a file or -stdin"),
        }
    }

    /// The file name shown in diagnostics.
    pub fn display_name(&self) -> String {
        match &self.input {
            Some(InputSource::File(path)) => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_input() {
        let config = Config::parse(["shader.nsl"]).unwrap();
        assert_eq!(config.mode, Mode::Compile);
        assert_eq!(
            config.input,
            Some(InputSource::File(PathBuf::from("shader.nsl")))
        );
        assert_eq!(config.output, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_options() {
        let config = Config::parse(["-verbose", "-stdin", "-tokens", "-o=out.json"]).unwrap();
        assert_eq!(config.mode, Mode::DumpTokens);
        assert_eq!(config.input, Some(InputSource::Stdin));
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert!(config.verbose);
    }

    #[test]
    fn test_help_needs_no_input() {
        for flag in ["-help", "-h", "-?"] {
            assert_eq!(Config::parse([flag]).unwrap().mode, Mode::Help);
        }
        assert_eq!(Config::parse(["-version"]).unwrap().mode, Mode::Version);
        assert_eq!(Config::parse(["-version", "-h"]).unwrap().mode, Mode::Help);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Config::parse(["-frobnicate", "a.nsl"]).is_err());
        assert!(Config::parse(["-o", "a.nsl"]).is_err());
        assert!(Config::parse(["-verbose=1", "a.nsl"]).is_err());
        assert!(Config::parse(["a.nsl", "b.nsl"]).is_err());
        assert!(Config::parse(["-stdin", "a.nsl"]).is_err());
        assert!(Config::parse(Vec::<String>::new()).is_err());
    }
}
