use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};

use wsl_pathconv::config::ConverterConfig;
use wsl_pathconv::logging;
use wsl_pathconv::{ConversionTarget, HostInfo, WslPathConverter};

/// Convert paths between WSL mount, Windows and double-backslash Windows forms.
///
/// Without a target flag each path is converted to the other side of the
/// boundary (or to `default_target` from the config file).
#[derive(Debug, Parser)]
#[command(name = "wslconv", version, about)]
struct Cli {
    /// Convert to the /mnt/<drive> form
    #[arg(short = 'u', long, conflicts_with_all = ["windows", "double_windows"])]
    linux: bool,

    /// Convert to the <drive>:\ form
    #[arg(short = 'w', long, conflicts_with = "double_windows")]
    windows: bool,

    /// Convert to the <drive>:\\ form
    #[arg(short = 'm', long)]
    double_windows: bool,

    /// Print the detected form instead of converting
    #[arg(long, conflicts_with_all = ["linux", "windows", "double_windows"])]
    classify: bool,

    /// Print one JSON object per path
    #[arg(long)]
    json: bool,

    /// Print whether the host runs under WSL
    #[arg(long)]
    info: bool,

    /// Config file (defaults to <config dir>/wslconv/config.toml)
    #[arg(short, long, env = "WSLCONV_CONFIG")]
    config: Option<PathBuf>,

    /// Raise the log level, once per occurrence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Paths to convert
    #[arg(required_unless_present = "info")]
    paths: Vec<String>,
}

impl Cli {
    fn target(&self) -> Option<ConversionTarget> {
        if self.linux {
            Some(ConversionTarget::Linux)
        } else if self.windows {
            Some(ConversionTarget::Windows)
        } else if self.double_windows {
            Some(ConversionTarget::DoubleWindows)
        } else {
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<ConverterConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => match ConverterConfig::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(ConverterConfig::default()),
        },
    };

    ConverterConfig::load_or_default(&path)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn render(
    converter: &WslPathConverter,
    path: &str,
    target: ConversionTarget,
    cli: &Cli,
) -> Result<String> {
    let report = if cli.classify {
        converter.classify_report(path)?
    } else {
        converter.report(path, target)?
    };

    if cli.json {
        return Ok(serde_json::to_string(&report)?);
    }

    Ok(match report.output {
        Some(output) => output,
        None => report.form.to_string(),
    })
}

fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    logging::init(logging::adjust_level(config.log_level_filter()?, cli.verbose, cli.quiet));

    let host = HostInfo::detect(&config.interop_probe());
    if cli.info {
        if cli.json {
            println!("{}", serde_json::to_string(&host)?);
        } else {
            println!("wsl_interop: {}", host.wsl_interop);
        }
    }
    if !host.wsl_interop && !cli.paths.is_empty() {
        info!("not running under WSL; converting anyway");
    }

    let target = cli.target().unwrap_or(config.default_target);
    debug!("target: {}", target);

    let converter = WslPathConverter::new();
    let mut all_ok = true;
    for path in &cli.paths {
        match render(&converter, path, target, &cli) {
            Ok(line) => println!("{}", line),
            Err(err) => {
                eprintln!("wslconv: {:#}", err);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("wslconv: {:#}", err);
            ExitCode::from(1)
        }
    }
}
