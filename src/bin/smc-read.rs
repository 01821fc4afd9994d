//! smc-read
//!
//! Reads controller keys and prints their decoded values.

use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use smcprobe::transport::simulated::SimulatedController;
use smcprobe::{Config, Key, KeyReading, Session, StructuredCall};
use tracing_subscriber::{fmt, EnvFilter};

/// smc-read
#[derive(Parser, Debug)]
#[command(name = "smc-read")]
#[command(about = "Read sensor keys from the System Management Controller")]
#[command(version)]
struct Args {
    /// Keys to read, e.g. TC0P F0Ac
    #[arg(required = true)]
    keys: Vec<String>,

    /// IOKit service class to open
    #[arg(short, long, default_value = "AppleSMC")]
    service: String,

    /// Use the built-in simulated controller instead of the real service
    #[arg(long)]
    simulate: bool,

    /// Print type, size and payload bytes next to each value
    #[arg(short, long)]
    raw: bool,

    /// Keep reading until interrupted
    #[arg(short, long)]
    watch: bool,

    /// Delay between passes in watch mode (milliseconds)
    #[arg(short, long, default_value = "1000")]
    interval_ms: u64,
}

fn main() {
    // Logs go to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,smcprobe=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .service_name(&args.service)
        .poll_interval_ms(args.interval_ms)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        process::exit(2);
    }

    for key in &args.keys {
        if !Key::new(key).is_canonical() {
            tracing::warn!(
                "Key {:?} is not 4 ASCII characters; it will be zero-padded or truncated",
                key
            );
        }
    }

    let all_ok = if args.simulate {
        tracing::info!("Using simulated controller");
        let session = Session::with_connection(SimulatedController::demo());
        let ok = run(&session, &args, &config);
        finish(session) && ok
    } else {
        let session = match Session::open(&config) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to open controller: {}", e);
                process::exit(1);
            }
        };
        let ok = run(&session, &args, &config);
        finish(session) && ok
    };

    if !all_ok {
        process::exit(1);
    }
}

/// Read every key once, or forever in watch mode. Returns false if any
/// read in the last pass failed.
fn run<C: StructuredCall>(session: &Session<C>, args: &Args, config: &Config) -> bool {
    loop {
        let ok = read_pass(session, args, &mut io::stdout().lock(), &mut io::stderr().lock());
        if !args.watch {
            return ok;
        }
        thread::sleep(Duration::from_millis(config.poll_interval_ms));
    }
}

/// One line per key: readings to `out`, failures to `err`
fn read_pass<C, O, E>(session: &Session<C>, args: &Args, out: &mut O, err: &mut E) -> bool
where
    C: StructuredCall,
    O: Write,
    E: Write,
{
    let mut ok = true;
    for key in &args.keys {
        let written = match session.read_raw(key) {
            Ok(reading) => writeln!(out, "{}", format_reading(&reading, args.raw)),
            Err(e) => {
                ok = false;
                writeln!(err, "{}  error: {}", key, e)
            }
        };
        if written.is_err() {
            ok = false;
        }
    }
    ok
}

fn format_reading(reading: &KeyReading, raw: bool) -> String {
    if !raw {
        return format!("{}  {}", reading.key, reading.value());
    }

    let bytes: Vec<String> = reading
        .declared_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    format!(
        "{}  [{}]  {}  {}  ({})",
        reading.key,
        reading.info.data_type,
        reading.info.size,
        reading.value(),
        bytes.join(" ")
    )
}

fn finish<C: StructuredCall>(session: Session<C>) -> bool {
    match session.close() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}
