use std::env;
use std::io;

use chrono::NaiveDate;
use dsnforge_generate::{
    DsnWriter, FakerSource, GenerateOptions, GenerationEngine, LocaleKey, SourceOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut individuals: u64 = 3;
    let mut seed: Option<u64> = None;
    let mut locale = LocaleKey::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--individuals" => individuals = args.next().ok_or("missing count")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing seed")?.parse()?),
            "--locale" => locale = args.next().ok_or("missing locale")?.parse()?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let reference_date = NaiveDate::from_ymd_opt(2024, 6, 15).ok_or("invalid date")?;
    let mut options = GenerateOptions::new(reference_date);
    options.individuals = individuals;

    let mut source = FakerSource::new(SourceOptions { seed, locale });
    let mut writer = DsnWriter::new(io::stdout().lock());
    let report = GenerationEngine::new(options).run(&mut source, &mut writer)?;

    eprintln!("seed={:?} lines={}", report.seed, report.lines);
    Ok(())
}
