use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use progress_core::{Progress, ProgressError, Step};
use tracing_subscriber::EnvFilter;
use ui::{App, UiConfig};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidInitial { raw: String },
    InvalidStep { raw: String },
    EmptyTitle,
    Progress(ProgressError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidInitial { raw } => write!(f, "invalid --initial value: {raw}"),
            ArgsError::InvalidStep { raw } => write!(f, "invalid --step value: {raw}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
            ArgsError::Progress(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ProgressError> for ArgsError {
    fn from(err: ProgressError) -> Self {
        ArgsError::Progress(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--initial <0-100>] [--step <n>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --initial 0");
    eprintln!("  --step 1");
    eprintln!("  --title Progress");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PROGRESS_INITIAL, PROGRESS_STEP, PROGRESS_TITLE, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    title: String,
    initial: Progress,
    step: Step,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn parse_initial(raw: String) -> Result<Progress, ArgsError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidInitial { raw: raw.clone() })?;
    Ok(Progress::new(value)?)
}

fn parse_step(raw: String) -> Result<Step, ArgsError> {
    // Parse signed so a negative step is reported as such rather than as garbage.
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidStep { raw: raw.clone() })?;
    Ok(Step::try_from(value)?)
}

fn parse_title(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

impl Args {
    /// Env values seed the defaults; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut title = env("PROGRESS_TITLE")
            .map(parse_title)
            .transpose()?
            .unwrap_or_else(|| "Progress".to_string());
        let mut initial = env("PROGRESS_INITIAL")
            .map(parse_initial)
            .transpose()?
            .unwrap_or(Progress::ZERO);
        let mut step = env("PROGRESS_STEP")
            .map(parse_step)
            .transpose()?
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--initial" => initial = parse_initial(require_value(args, "--initial")?)?,
                "--step" => step = parse_step(require_value(args, "--step")?)?,
                "--title" => title = parse_title(require_value(args, "--title")?)?,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            title,
            initial,
            step,
        }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    tracing::info!(
        title = %args.title,
        initial = args.initial.value(),
        step = args.step.value(),
        "launching progress window"
    );

    let config = UiConfig::new(args.title.clone())
        .with_initial(args.initial)
        .with_step(args.step);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(config)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(error = %err, "progress app failed to start");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str], env: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let mut iter = argv.iter().map(|s| (*s).to_string());
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    fn run_args(parsed: Parsed) -> Args {
        match parsed {
            Parsed::Run(args) => args,
            Parsed::Help => panic!("expected run args"),
        }
    }

    #[test]
    fn defaults_without_args_or_env() {
        let args = run_args(parse(&[], &[]).unwrap());
        assert_eq!(args.title, "Progress");
        assert_eq!(args.initial, Progress::ZERO);
        assert_eq!(args.step, Step::ONE);
    }

    #[test]
    fn flags_override_env() {
        let args = run_args(
            parse(
                &["--initial", "40", "--step", "10", "--title", " Build "],
                &[("PROGRESS_INITIAL", "5"), ("PROGRESS_STEP", "2")],
            )
            .unwrap(),
        );
        assert_eq!(args.initial.value(), 40);
        assert_eq!(args.step.value(), 10);
        assert_eq!(args.title, "Build");
    }

    #[test]
    fn env_fills_in_missing_flags() {
        let args = run_args(
            parse(&[], &[("PROGRESS_INITIAL", "75"), ("PROGRESS_TITLE", "Sync")]).unwrap(),
        );
        assert_eq!(args.initial.value(), 75);
        assert_eq!(args.title, "Sync");
    }

    #[test]
    fn rejects_out_of_range_initial() {
        let err = parse(&["--initial", "101"], &[]).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::Progress(ProgressError::OutOfRange { value: 101 })
        ));
    }

    #[test]
    fn rejects_negative_step() {
        let err = parse(&["--step", "-3"], &[]).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::Progress(ProgressError::NegativeStep { value: -3 })
        ));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            parse(&["--initial", "half"], &[]).unwrap_err(),
            ArgsError::InvalidInitial { .. }
        ));
        assert!(matches!(
            parse(&["--step", "1.5"], &[]).unwrap_err(),
            ArgsError::InvalidStep { .. }
        ));
        assert!(matches!(
            parse(&["--title", "  "], &[]).unwrap_err(),
            ArgsError::EmptyTitle
        ));
    }

    #[test]
    fn reports_missing_value_and_unknown_arg() {
        assert!(matches!(
            parse(&["--step"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--step" }
        ));
        assert!(matches!(
            parse(&["--fast"], &[]).unwrap_err(),
            ArgsError::UnknownArg(arg) if arg == "--fast"
        ));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--step", "2", "-h"], &[]).unwrap(), Parsed::Help);
    }
}
