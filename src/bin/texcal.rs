//! texcal CLI - Printable LaTeX year calendars

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use texcal::{
    files::write_atomic,
    generate_latex,
    holidays::{BankHolidayFeed, Division, EnglandAndWales, HolidaySource, JsonFileSource},
    utils::logging,
    CalendarOptions, CalendarResult, LayoutMode,
};
#[cfg(feature = "cli")]
use tracing::info;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texcal")]
#[command(version)]
#[command(about = "texcal - Printable LaTeX year calendars with weekend and holiday highlighting", long_about = None)]
struct Cli {
    /// Output .tex file to write to ("-" for stdout)
    output_file: String,

    /// Year to generate the calendar for (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Calendar layout to generate
    #[arg(short, long, value_enum, default_value_t = Mode::FullYear)]
    mode: Mode,

    /// JSON file mapping ISO-8601 dates to holiday labels
    #[arg(long, conflicts_with = "holiday_feed")]
    holidays: Option<PathBuf>,

    /// gov.uk bank-holidays.json feed document
    #[arg(long)]
    holiday_feed: Option<PathBuf>,

    /// Feed division to read holidays from
    #[arg(long, value_enum, default_value_t = FeedDivision::EnglandAndWales, requires = "holiday_feed")]
    division: FeedDivision,

    /// Do not add Easter Sunday, Christmas Day and Boxing Day
    #[arg(long)]
    no_fixed_feasts: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Quiet mode: suppress status output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Whole year on A3, two half-year tables
    #[value(alias = "a3-year")]
    FullYear,
    /// January to June on landscape A4
    #[value(alias = "a4-first-half")]
    HalfYearFirst,
    /// July to December on landscape A4
    #[value(alias = "a4-second-half")]
    HalfYearSecond,
}

#[cfg(feature = "cli")]
impl From<Mode> for LayoutMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::FullYear => LayoutMode::FullYear,
            Mode::HalfYearFirst => LayoutMode::HalfFirst,
            Mode::HalfYearSecond => LayoutMode::HalfSecond,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum FeedDivision {
    EnglandAndWales,
    Scotland,
    NorthernIreland,
}

#[cfg(feature = "cli")]
impl From<FeedDivision> for Division {
    fn from(division: FeedDivision) -> Self {
        match division {
            FeedDivision::EnglandAndWales => Division::EnglandAndWales,
            FeedDivision::Scotland => Division::Scotland,
            FeedDivision::NorthernIreland => Division::NorthernIreland,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> CalendarResult<()> {
    let mut options = CalendarOptions::new();
    if let Some(year) = cli.year {
        options.year = year;
    }
    options.mode = cli.mode.into();
    options.fixed_feasts = !cli.no_fixed_feasts;

    let source = holiday_source(cli)?;
    info!(year = options.year, mode = %options.mode, source = %source.describe(), "generating calendar");

    // Everything is rendered before the output is touched
    let tex = generate_latex(&options, source.as_ref())?;

    if cli.output_file == "-" {
        return write_stdout(&mut std::io::stdout().lock(), &tex);
    }

    write_atomic(&cli.output_file, &tex)?;
    if !cli.quiet {
        eprintln!("✓ Output written to: {}", cli.output_file);
    }
    Ok(())
}

/// Pick the holiday source from the command line; built-in rules by default
#[cfg(feature = "cli")]
fn holiday_source(cli: &Cli) -> CalendarResult<Box<dyn HolidaySource>> {
    if let Some(ref path) = cli.holidays {
        return Ok(Box::new(JsonFileSource::new(path)));
    }
    if let Some(ref path) = cli.holiday_feed {
        return Ok(Box::new(BankHolidayFeed::from_file(path, cli.division.into())?));
    }
    Ok(Box::new(EnglandAndWales))
}

/// Emit the document unchanged, byte for byte what `write_atomic` stores
#[cfg(feature = "cli")]
fn write_stdout(out: &mut impl Write, tex: &str) -> CalendarResult<()> {
    out.write_all(tex.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texcal --features cli");
    eprintln!("  texcal [OPTIONS] <OUTPUT_FILE>");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use texcal::HolidayMap;

    #[test]
    fn test_stdout_matches_file_output() {
        let opts = CalendarOptions::full_year(2024);
        let tex = generate_latex(&opts, &HolidayMap::new()).unwrap();

        let mut stdout = Vec::new();
        write_stdout(&mut stdout, &tex).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("calendar.tex");
        write_atomic(&target, &tex).unwrap();

        assert_eq!(stdout, std::fs::read(&target).unwrap());
        assert!(!stdout.ends_with(b"\n"));
    }
}
