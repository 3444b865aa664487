use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use serde_json::Value;

use magick_cmd::args::option_registry;
use magick_cmd::command::Completion;
use magick_cmd::config::Config;
use magick_cmd::logging::init_tracing;
use magick_cmd::MagickCommand;

/// Build and run ImageMagick commands from a declarative JSON argument list.
#[derive(Debug, Parser)]
#[command(name = "magick-cmd", version, about)]
struct Cli {
    /// JSON array of argument items, e.g. '[{"resize": {"width": 64}}, "strip"]'.
    /// Reads stdin when absent or "-".
    args: Option<String>,

    /// Config file (default: ~/.config/magick-cmd/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the program name (e.g. "magick")
    #[arg(long, short = 'p')]
    program: Option<String>,

    /// Print the command line instead of running it
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// List supported option names and exit
    #[arg(long)]
    list_options: bool,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    if cli.list_options {
        for def in option_registry() {
            println!("{:<24} {:<28} {:?}", def.name, def.flag, def.kind);
        }
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let items = parse_items(read_args(cli.args.as_deref())?.as_str())?;

    let mut command = MagickCommand::from_config(&config, Completion::events());
    if let Some(program) = cli.program {
        command = command.with_program(program);
    }
    command.apply_args(&items)?;

    if cli.dry_run {
        println!("{}", command.command_line());
        return Ok(0);
    }

    let output = command.output().await;
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);

    Ok(if output.is_success() { 0 } else { 1 })
}

fn read_args(arg: Option<&str>) -> anyhow::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading arguments from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_items(text: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).context("arguments are not valid JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) | Value::String(_) => Ok(vec![value]),
        _ => bail!("arguments must be a JSON array, object or option name"),
    }
}
