use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use habit_core::HabitDay;
use services::api::{DEFAULT_BASE_URL, parse_timeout};
use services::{ApiConfig, ApiError, Clock, HabitDayService, HttpHabitsApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDate { raw: String },
    Api(ApiError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDate { raw } => write!(f, "invalid --date value: {raw}"),
            ArgsError::Api(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ApiError> for ArgsError {
    fn from(err: ApiError) -> Self {
        ArgsError::Api(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    initial_day: HabitDay,
    habit_days: Arc<HabitDayService>,
}

impl UiApp for DesktopApp {
    fn initial_day(&self) -> HabitDay {
        self.initial_day
    }

    fn habit_days(&self) -> Arc<HabitDayService> {
        Arc::clone(&self.habit_days)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--api-url <url>] [--date <YYYY-MM-DD | RFC 3339>] [--timeout-secs <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_BASE_URL}");
    eprintln!("  --date today (local time)");
    eprintln!("  --timeout-secs 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HABITS_API_URL, HABITS_DATE, HABITS_API_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug)]
struct Args {
    api: ApiConfig,
    date: Option<HabitDay>,
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut api_url = env("HABITS_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut timeout = env("HABITS_API_TIMEOUT_SECS")
            .filter(|value| !value.trim().is_empty())
            .map(|raw| parse_timeout(&raw))
            .transpose()?;
        let mut date = env("HABITS_DATE")
            .filter(|value| !value.trim().is_empty())
            .map(|raw| parse_date(&raw))
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => api_url = require_value(args, "--api-url")?,
                "--date" => {
                    let value = require_value(args, "--date")?;
                    date = Some(parse_date(&value)?);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    timeout = Some(parse_timeout(&value)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let mut api = ApiConfig::new(&api_url)?;
        if let Some(timeout) = timeout {
            api = api.with_timeout(timeout);
        }
        Ok(Parsed::Run(Self { api, date }))
    }
}

fn parse_date(raw: &str) -> Result<HabitDay, ArgsError> {
    HabitDay::parse(raw).map_err(|_| ArgsError::InvalidDate {
        raw: raw.to_string(),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    // The error itself is reported once, by `main`.
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).inspect_err(|_| {
        print_usage();
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let clock = Clock::system();
    let initial_day = args.date.unwrap_or_else(|| HabitDay::today(&clock));
    tracing::info!(
        api_url = %args.api.base_url(),
        timeout_secs = args.api.timeout().as_secs(),
        day = %initial_day,
        "starting habit tracker"
    );

    let api = HttpHabitsApi::new(args.api, clock)?;
    let app = DesktopApp {
        initial_day,
        habit_days: Arc::new(HabitDayService::new(clock, Arc::new(api))),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Habits")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(error = %err, "habit tracker exited with an error");
        std::process::exit(2);
    }
}
