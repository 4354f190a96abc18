//! Draws repeatedly from a weighted table read from a config file and reports the frequencies
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::{fs, process, thread};
use weightedrand::config::DrawSettings;
use weightedrand::weighted::{Chooser, RandomSource};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    /// Folder to write a JSON report of the run into
    #[arg(short, long, default_value = None)]
    reports_folder: Option<String>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Serialize)]
struct ItemReport<'a> {
    item: &'a str,
    weight: i64,
    expected: f64,
    observed: f64,
    count: usize,
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    draws: usize,
    seed: Option<u64>,
    total_weight: u64,
    items: Vec<ItemReport<'a>>,
}

fn run_draws<R: RandomSource>(
    chooser: &Chooser<String>,
    draws: usize,
    rng: &mut R,
) -> Result<Vec<usize>, weightedrand::weighted::ChooserError> {
    let mut counts = vec![0; chooser.len()];
    for _ in 0..draws {
        let index = chooser.pick_index_with(rng)?;
        counts[index] += 1;
    }
    Ok(counts)
}

fn write_report(folder: &str, report: &RunReport) -> std::io::Result<String> {
    fs::create_dir_all(folder)?;
    let filename = Path::new(folder).join(format!(
        "weightedrand-{}.json",
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    ));
    let serialized = serde_json::to_string_pretty(report)?;
    fs::write(&filename, serialized)?;
    Ok(filename.display().to_string())
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = DrawSettings::from_file(&args.config_file).unwrap_or_else(|e| fail(e));
    let chooser = Chooser::new(settings.choices).unwrap_or_else(|e| fail(e));
    log::info!(
        "Drawing {} times from {} choices",
        settings.draws,
        chooser.len()
    );

    let counts = match settings.seed {
        Some(seed) => run_draws(&chooser, settings.draws, &mut StdRng::seed_from_u64(seed)),
        None => run_draws(&chooser, settings.draws, &mut rand::thread_rng()),
    }
    .unwrap_or_else(|e| fail(e));

    let items: Vec<ItemReport> = chooser
        .choices()
        .iter()
        .zip(counts.iter())
        .enumerate()
        .map(|(i, (choice, count))| ItemReport {
            item: &choice.item,
            weight: choice.weight,
            expected: chooser.probability(i).unwrap_or_default(),
            observed: *count as f64 / settings.draws.max(1) as f64,
            count: *count,
        })
        .collect();

    println!("Item\tWeight\tExpected\tObserved");
    for item in items.iter() {
        println!(
            "{}\t{}\t{:>5.2}%\t{:>5.2}%",
            item.item,
            item.weight,
            100.0 * item.expected,
            100.0 * item.observed
        );
    }

    if let Some(folder) = args.reports_folder {
        let report = RunReport {
            draws: settings.draws,
            seed: settings.seed,
            total_weight: chooser.total(),
            items,
        };
        match write_report(&folder, &report) {
            Ok(filename) => log::info!("Wrote report to {}", filename),
            Err(e) => fail(format!("Failed to write report: {}", e)),
        }
    }
}
