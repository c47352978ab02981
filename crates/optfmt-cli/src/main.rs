mod document;
mod error;
mod logging;

use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use optfmt_core::print::{Symbol, VariableNameResolver, default_variable_name, symbol};
use optfmt_core::{Charset, PrintMode, model_string};

use crate::document::ModelDocument;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render optimization models as terminal text or LaTeX"
)]
struct Cli {
    /// Log filter (e.g. `debug`, `optfmt_core=trace`); overrides OPTFMT_TRACE
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a JSON model document
    Render(RenderArgs),
    /// Print the symbol table for an output format
    Symbols(SymbolsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Model document path, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: PathBuf,

    /// Output format; OPTFMT_ASCII=1 turns `terminal` into `ascii`
    #[arg(long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Ignore document names and print variables as `x[<index>]`
    #[arg(long)]
    index_names: bool,
}

#[derive(Parser, Debug)]
struct SymbolsArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "terminal")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Terminal,
    Ascii,
    Latex,
}

impl OutputFormat {
    fn mode(self, charset: Charset) -> PrintMode {
        match self {
            OutputFormat::Terminal => PrintMode::Terminal(charset),
            OutputFormat::Ascii => PrintMode::ascii(),
            OutputFormat::Latex => PrintMode::markup(),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level)?;
    let output = match cli.command {
        Command::Render(args) => render_command(args)?,
        Command::Symbols(args) => symbols_table(args.format.mode(Charset::from_env())),
    };
    print!("{output}");
    Ok(())
}

fn render_command(args: RenderArgs) -> Result<String, CliError> {
    let text = read_input(&args.input)?;
    let model = ModelDocument::from_json(&text)?.into_model()?;
    let mode = args.format.mode(Charset::from_env());
    let index_names: VariableNameResolver<'_> = &default_variable_name;
    let override_names = args.index_names.then_some(index_names);
    let mut rendered = model_string(mode, &model, override_names)?;
    if mode.is_markup() {
        rendered.push('\n');
    }
    Ok(rendered)
}

fn read_input(path: &PathBuf) -> Result<String, CliError> {
    let mut text = String::new();
    let result = if path.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut text).map(|_| ())
    } else {
        std::fs::read_to_string(path).map(|contents| text = contents)
    };
    result.map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(text)
}

fn symbols_table(mode: PrintMode) -> String {
    let mut table = String::new();
    for tag in Symbol::ALL {
        let _ = writeln!(table, "{:<10} {}", tag.name(), symbol(mode, tag));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_arguments_parse() {
        let cli = Cli::try_parse_from([
            "optfmt",
            "render",
            "--input",
            "model.json",
            "--format",
            "latex",
            "--log-level",
            "debug",
        ])
        .expect("arguments should parse");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.input, PathBuf::from("model.json"));
                assert_eq!(args.format, OutputFormat::Latex);
                assert!(!args.index_names);
            }
            Command::Symbols(_) => panic!("expected render"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["optfmt", "symbols", "--format", "html"]).is_err());
    }

    #[test]
    fn formats_map_to_modes() {
        assert_eq!(
            OutputFormat::Terminal.mode(Charset::Ascii),
            PrintMode::ascii()
        );
        assert_eq!(
            OutputFormat::Terminal.mode(Charset::Unicode),
            PrintMode::terminal()
        );
        assert_eq!(OutputFormat::Ascii.mode(Charset::Unicode), PrintMode::ascii());
        assert!(OutputFormat::Latex.mode(Charset::Unicode).is_markup());
    }

    #[test]
    fn symbols_table_lists_every_tag() {
        let table = symbols_table(PrintMode::ascii());
        assert_eq!(table.lines().count(), Symbol::ALL.len());
        assert!(table.lines().any(|line| line == "leq        <="));
        assert!(table.is_ascii());
    }

    #[test]
    fn render_reads_document_file() {
        let path = std::env::temp_dir().join(format!("optfmt-render-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"variables": ["x", "y"],
                "objective": {"sense": "max", "function": {"type": "affine",
                    "terms": [{"variable": "x", "coefficient": 1}, {"variable": "y", "coefficient": -2}]}},
                "constraints": [{"function": {"type": "variable", "variable": "y"}, "set": {"type": "zero_one"}}]}"#,
        )
        .expect("write document");

        let named = render_command(RenderArgs {
            input: path.clone(),
            format: OutputFormat::Ascii,
            index_names: false,
        })
        .expect("render");
        let indexed = render_command(RenderArgs {
            input: path.clone(),
            format: OutputFormat::Latex,
            index_names: true,
        })
        .expect("render");
        let _ = std::fs::remove_file(&path);

        assert_eq!(named, "Max x - 2 y\nSubject to\n y binary\n");
        assert!(indexed.starts_with("$$ \\begin{aligned}\n\\max\\quad & x_{0} - 2 x_{1}"));
        assert!(indexed.ends_with("\\end{aligned} $$\n"));
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let err = render_command(RenderArgs {
            input: PathBuf::from("/nonexistent/optfmt/model.json"),
            format: OutputFormat::Terminal,
            index_names: false,
        })
        .unwrap_err();
        assert_eq!(err.code(), "INPUT_IO");
    }
}
