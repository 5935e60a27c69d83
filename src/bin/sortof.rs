use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sortof::app::{Algorithm, AppError, Timeout, failure_message, open_inputs, parse_timeout};
use sortof::common::{TOOL_NAME, io_error_msg, reset_sigpipe};
use sortof::context::Context;

/// Environment variable holding the tracing filter, e.g. `SORTOF_LOG=debug`.
const LOG_ENV: &str = "SORTOF_LOG";

#[derive(Parser)]
#[command(
    name = "sortof",
    about = "Sort lines of text files, eventually",
    version,
    disable_version_flag = true,
    arg(
        clap::Arg::new("version")
            .short('v')
            .long("version")
            .action(clap::ArgAction::Version)
            .help("Print version")
    ),
    after_help = "With no FILE, or when FILE is -, read standard input."
)]
struct Cli {
    /// Sorting algorithm
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Give up after DURATION (units: ns, us, ms, s, m, h); 0 waits forever
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "DURATION",
        value_parser = parse_timeout,
        default_value = "0",
        allow_hyphen_values = true
    )]
    timeout: Timeout,

    /// Files to sort (reads stdin if none given)
    files: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Open every input, then sort them in turn, printing each result as soon
/// as it is ready. Nothing is printed if an input cannot be opened.
fn run(
    algorithm: Algorithm,
    ctx: &Context,
    files: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let inputs = open_inputs(files)?;
    for input in inputs {
        tracing::debug!(name = input.name(), "reading input");
        let sorted = input.sort(algorithm, ctx)?;
        for line in &sorted {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    reset_sigpipe();
    init_tracing();

    let cli = Cli::parse();

    let ctx = cli.timeout.context();
    #[cfg(unix)]
    sortof::context::cancel_on_interrupt(&ctx);

    let files: Vec<String> = if cli.files.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.files.clone()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run(cli.algorithm, &ctx, &files, &mut out) {
        let msg = if let Some(app_err) = e.downcast_ref::<AppError>() {
            failure_message(app_err)
        } else if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            format!("write error: {}", io_error_msg(io_err))
        } else {
            e.to_string()
        };
        eprintln!("{}: {}", TOOL_NAME, msg);
        process::exit(1);
    }
}
