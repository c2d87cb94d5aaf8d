//! CLI entry point for cloudaudit.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All business logic lives in the `cloudaudit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use cloudaudit_app::{
    ExplainOutput, JsonFileProvider, JsonWriterSink, RuleOutput, build_evaluator, list_checks,
    load_config, parse_event, run_explain, run_rule,
};
use cloudaudit_settings::{Overrides, ResolvedConfig};
use std::io::{BufWriter, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "cloudaudit",
    version,
    about = "Compliance checks for cloud IAM user snapshots"
)]
struct Cli {
    /// Path to cloudaudit config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "cloudaudit.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a resource snapshot for a trigger event and write the evaluation batches.
    Evaluate {
        /// Trigger event JSON (`invokingEvent` + `resultToken`).
        #[arg(long)]
        event: Utf8PathBuf,

        /// Resource snapshot JSON for the resource named in the event.
        #[arg(long)]
        snapshot: Utf8PathBuf,

        /// Where to write the evaluation batches (stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Explain a check by id or name.
    Explain {
        /// The check id (e.g. "28c0fd9a-d92a-4cdb-bef9-19c4b6657721") or name
        /// (e.g. "iam_user.active_access_key").
        identifier: String,
    },

    /// List the checks enabled by the current configuration.
    ListChecks,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format);
    install_panic_hook();

    match &cli.cmd {
        Commands::Evaluate {
            event,
            snapshot,
            out,
        } => cmd_evaluate(&cli, event, snapshot, out.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::ListChecks => cmd_list_checks(&cli),
    }
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Routes panic reports through the tracing subscriber so `--log-format json` stays
/// machine-readable, including panics a check raises and the evaluator contains.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = panic_payload(info.payload());
        match info.location() {
            Some(loc) => tracing::error!(
                file = loc.file(),
                line = loc.line(),
                "panic: {payload}"
            ),
            None => tracing::error!("panic: {payload}"),
        }
    }));
}

fn panic_payload(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

fn resolve(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    // Missing config file is allowed (defaults apply).
    let cfg_text = match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read config: {}", cli.config)),
    };
    let resolved = load_config(
        &cfg_text,
        Overrides {
            profile: cli.profile.clone(),
        },
    )?;
    tracing::debug!(
        config = %cli.config,
        profile = %resolved.effective.profile,
        "resolved config"
    );
    Ok(resolved)
}

fn cmd_evaluate(
    cli: &Cli,
    event_path: &Utf8Path,
    snapshot_path: &Utf8Path,
    out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let resolved = resolve(cli)?;
        let event_text = std::fs::read_to_string(event_path)
            .with_context(|| format!("read event: {}", event_path))?;
        let event = parse_event(&event_text)?;

        let evaluator = build_evaluator(&resolved.effective);
        let provider = JsonFileProvider::new(snapshot_path);

        let output = match out {
            Some(path) => {
                let writer = create_file(path)?;
                let mut sink = JsonWriterSink::new(writer);
                run_rule(&event, &evaluator, &provider, &mut sink)?
            }
            None => {
                let mut sink = JsonWriterSink::new(std::io::stdout().lock());
                run_rule(&event, &evaluator, &provider, &mut sink)?
            }
        };

        Ok(exit_code(&output))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("cloudaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// 0 = compliant or not applicable, 2 = at least one non-compliant record.
fn exit_code(output: &RuleOutput) -> i32 {
    if output.counts.is_compliant() { 0 } else { 2 }
}

fn create_file(path: &Utf8Path) -> anyhow::Result<BufWriter<std::fs::File>> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("create file: {}", path))?;
    Ok(BufWriter::new(file))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", cloudaudit_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_check_names,
        } => {
            eprint!(
                "{}",
                cloudaudit_app::format_not_found(
                    &identifier,
                    available_check_ids,
                    available_check_names
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_list_checks(cli: &Cli) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let mut stdout = std::io::stdout().lock();
    for check in list_checks(&resolved.effective) {
        writeln!(
            stdout,
            "{}  {}  {}  {}",
            check.id, check.name, check.default_score, check.text
        )?;
    }
    Ok(())
}
