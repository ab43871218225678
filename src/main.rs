use clap::{Parser, ValueEnum};
use deep_assert::errors::Error;
use deep_assert::{Asserter, Colorizer, Message, Recorder};
use serde_json::Value;
use tracing::Level;

/// Compare two JSON documents and print an assertion report when they differ.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Actual JSON document (string)
    actual: String,
    /// Expected JSON document (string)
    expected: String,
    /// Fail when the documents are equal instead of when they differ
    #[arg(long)]
    not: bool,
    /// Message to include in the report (optional)
    #[arg(long, short)]
    message: Option<String>,
    /// When to color the report
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,
    /// Log debug events to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn colorizer(self) -> Colorizer {
        match self {
            ColorWhen::Auto => Colorizer::detect(),
            ColorWhen::Always => Colorizer::new(true),
            ColorWhen::Never => Colorizer::disabled(),
        }
    }
}

fn parse(side: &'static str, json: &str) -> Result<Value, Error> {
    serde_json::from_str(json).map_err(|source| Error::InvalidJson { side, source })
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // Parse input JSON.
    let (actual, expected) = match (parse("actual", &args.actual), parse("expected", &args.expected)) {
        (Ok(a), Ok(e)) => (a, e),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let asserter = Asserter::new(args.color.colorizer());
    let message = args.message.as_ref().map(Message::from).unwrap_or_default();
    let mut rec = Recorder::new();
    let ok = if args.not {
        asserter.not_equal(&mut rec, &actual, &expected, message)
    } else {
        asserter.equal(&mut rec, &actual, &expected, message)
    };

    if !ok {
        println!("{}", rec.logs().trim_start_matches('\n'));
        std::process::exit(1);
    }
}
