use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use essence_core::{entries, report, run, Calculation, Catalogue, Category, Collection};

mod logging;

use logging::{init_logging, LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "essence-lock",
    version,
    about = "Work out which slot locks can drop a wanted essence combination"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate lock patterns for a base / additional / skill combination.
    Calc(CalcArgs),
    /// Calculate from raw `Label:value` entries, e.g. `Base:Intellect`.
    Run {
        entries: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the values each category can take across all areas.
    Options {
        #[arg(long, value_name = "FILE")]
        tables: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct CalcArgs {
    #[arg(long, default_value = "Intellect")]
    base: String,

    #[arg(long, default_value = "Attack")]
    additional: String,

    #[arg(long, default_value = "Nightfall")]
    skill: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON tables to use instead of the built-in ones.
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Weapon already owned; marked in the text report. Repeatable.
    #[arg(long, value_name = "NAME")]
    owned: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

enum Tables {
    Builtin,
    Loaded(Catalogue),
}

impl Tables {
    fn load(path: Option<&Path>) -> essence_core::Result<Self> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "loading tables");
                Ok(Tables::Loaded(Catalogue::from_path(path)?))
            }
            None => Ok(Tables::Builtin),
        }
    }

    fn catalogue(&self) -> &Catalogue {
        match self {
            Tables::Builtin => Catalogue::builtin(),
            Tables::Loaded(catalogue) => catalogue,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format));

    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> essence_core::Result<()> {
    match command {
        Command::Calc(args) => {
            let input = entries(&args.base, &args.additional, &args.skill);
            calculate(&input, &args.output)
        }
        Command::Run { entries, output } => calculate(&entries, &output),
        Command::Options { tables } => {
            let tables = Tables::load(tables.as_deref())?;
            print!("{}", render_options(tables.catalogue()));
            Ok(())
        }
    }
}

fn calculate(input: &[String], output: &OutputArgs) -> essence_core::Result<()> {
    let tables = Tables::load(output.tables.as_deref())?;
    let calculation = run(input, tables.catalogue())?;
    info!(
        areas = calculation.results.len(),
        groups = calculation.results.iter().map(|r| r.groups.len()).sum::<usize>(),
        "calculation finished"
    );
    println!("{}", render(&calculation, output)?);
    Ok(())
}

fn render(calculation: &Calculation, output: &OutputArgs) -> essence_core::Result<String> {
    match output.format {
        OutputFormat::Text => {
            let owned: Collection = output.owned.iter().cloned().collect();
            Ok(report::render(calculation, &owned))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(calculation)?),
    }
}

fn render_options(catalogue: &Catalogue) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(category.label());
        out.push_str(":\n");
        for value in catalogue.values(category) {
            out.push_str("  ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_defaults() {
        let cli = Cli::try_parse_from(["essence-lock", "calc"]).unwrap();
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.base, "Intellect");
        assert_eq!(args.additional, "Attack");
        assert_eq!(args.skill, "Nightfall");
        assert_eq!(args.output.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn run_takes_raw_entries_and_owned_list() {
        let cli = Cli::try_parse_from([
            "essence-lock",
            "-vv",
            "run",
            "Base:Will",
            "Skill:Flow",
            "--owned",
            "Quiet Lantern",
            "--owned",
            "Pale Meridian",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Run { entries, output } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(entries, ["Base:Will", "Skill:Flow"]);
        assert_eq!(output.owned, ["Quiet Lantern", "Pale Meridian"]);
        assert_eq!(output.format, OutputFormat::Json);
    }

    #[test]
    fn run_with_two_entries_is_an_input_error() {
        let output = OutputArgs {
            format: OutputFormat::Text,
            tables: None,
            owned: vec![],
        };
        let input = vec!["Base:Will".to_string(), "Skill:Flow".to_string()];
        let err = calculate(&input, &output).unwrap_err();
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn json_output_parses_back() {
        let output = OutputArgs {
            format: OutputFormat::Json,
            tables: None,
            owned: vec![],
        };
        let input = entries("Will", "Healing", "Medical");
        let calculation = run(&input, Catalogue::builtin()).unwrap();
        let text = render(&calculation, &output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["wanted"]["additional"], "Healing Boost");
    }

    #[test]
    fn options_lists_each_category() {
        let text = render_options(Catalogue::builtin());
        assert!(text.starts_with("Base:\n  Agility Boost\n"));
        assert!(text.contains("Additional:\n"));
        assert!(text.contains("Skill:\n"));
        assert!(text.contains("  Nightfall\n"));
    }
}
