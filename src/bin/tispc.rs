//! tispc 命令行

use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// 可被识别的选项
const OPTIONS: [&str; 6] = ["-v", "--verbose", "-h", "--help", "-V", "--version"];
const VERBOSE: [&str; 2] = ["-v", "--verbose"];

/// Expand `#begin_template` / `#end_template` blocks over the built-in type table.
#[derive(Debug, Parser)]
#[command(name = "tispc", version)]
struct Cli {
    /// Template file to read
    input: PathBuf,

    /// File to write the expanded blocks to (overwritten)
    output: PathBuf,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn is_option(arg: &OsString, options: &[&str]) -> bool {
    arg.to_str().is_some_and(|arg| options.contains(&arg))
}

/// 整理命令行参数
///
/// 前两个非选项参数总是路径 (允许以 `-` 开头), 其后的参数一律忽略,
/// 此时只识别路径之前的 `-v` / `--verbose`. 路径不足两个时原样交给 clap.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let bin = args.next().unwrap_or_else(|| "tispc".into());
    let rest: Vec<OsString> = args.collect();

    let paths: Vec<usize> = rest
        .iter()
        .enumerate()
        .filter(|(_, arg)| !is_option(arg, &OPTIONS))
        .map(|(k, _)| k)
        .take(2)
        .collect();

    let &[input, output] = paths.as_slice() else {
        return std::iter::once(bin).chain(rest).collect();
    };

    let mut normalized = vec![bin];
    if rest[..output].iter().any(|arg| is_option(arg, &VERBOSE)) {
        normalized.push("--verbose".into());
    }
    normalized.push("--".into());
    normalized.push(rest[input].clone());
    normalized.push(rest[output].clone());
    normalized
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let filter = if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tispc::pipeline::expand(&cli.input, &cli.output).with_context(|| {
        format!(
            "failed to expand {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Not enough arguments.");
            println!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
