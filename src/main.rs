use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use mdcheck_lib::config::{UserConfig, load_user_config, resolve, resolve_tolerant};
use mdcheck_lib::exit_codes;
use mdcheck_lib::output::{OutputFormat, OutputWriter, format_all_warnings_as_json};
use mdcheck_lib::{LintOptions, LintWarning, RuleRegistry, lint};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown files to lint. Use `-` or pass nothing to read stdin.
    #[arg(required = false)]
    files: Vec<String>,

    /// markdownlint-style configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text, concise or json
    #[arg(long, default_value = "text")]
    output_format: String,

    /// Disable rules with invalid configuration instead of aborting
    #[arg(long)]
    tolerant: bool,

    /// Skip rules that have not started after this many milliseconds
    #[arg(long, value_name = "MS")]
    deadline_ms: Option<u64>,

    /// List available rules with their default options and exit
    #[arg(long)]
    list_rules: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print nothing; report through the exit code only
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn list_rules(registry: &RuleRegistry) {
    for rule in registry.iter() {
        let defaults = rule
            .option_schema()
            .options
            .iter()
            .map(|spec| format!("{}={}", spec.name, spec.default))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {:<22} {:<42} {}",
            rule.name().bold(),
            rule.alias(),
            rule.description(),
            defaults.dimmed()
        );
    }
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))
    }
}

fn run(cli: Cli) -> Result<i32> {
    let registry = RuleRegistry::builtin();
    if cli.list_rules {
        list_rules(&registry);
        return Ok(exit_codes::SUCCESS);
    }

    let format: OutputFormat = cli.output_format.parse().map_err(anyhow::Error::msg)?;
    let writer = OutputWriter::new(cli.quiet);

    let user_config = match &cli.config {
        Some(path) => load_user_config(path)?,
        None => UserConfig::default(),
    };
    let resolved = if cli.tolerant {
        let (resolved, errors) = resolve_tolerant(&registry, &user_config);
        for err in &errors {
            writer.write_error(&format!("{}: {err}", "warning".yellow().bold()))?;
        }
        resolved
    } else {
        resolve(&registry, &user_config)?
    };

    let options = LintOptions {
        deadline: cli.deadline_ms.map(Duration::from_millis),
    };
    let files = if cli.files.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.files
    };

    let mut results: Vec<(String, Vec<LintWarning>)> = Vec::with_capacity(files.len());
    let mut truncated = false;
    for file in &files {
        let content = read_input(file)?;
        let report = lint(&content, &registry, &resolved, &options);
        truncated |= report.truncated;
        let display = if file == "-" { "<stdin>" } else { file.as_str() };
        results.push((display.to_string(), report.warnings));
    }

    let total: usize = results.iter().map(|(_, warnings)| warnings.len()).sum();
    let formatter = format.create_formatter(!cli.no_color);
    if format == OutputFormat::Json {
        writer.writeln(&format_all_warnings_as_json(&results))?;
    } else {
        for (file, warnings) in &results {
            writer.writeln(&formatter.format_warnings(warnings, file))?;
        }
        if let Some(summary) = formatter.format_summary(results.len(), total, truncated) {
            writer.writeln(&summary)?;
        }
    }

    Ok(exit_codes::for_report(total > 0))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{}: {err:#}", "Error".red().bold());
            process::exit(exit_codes::TOOL_ERROR);
        }
    }
}
