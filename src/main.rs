use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use colored::Colorize;
use slog::error;

use fourier_rs::bench::TransformKind;
use fourier_rs::utils;

pub mod command_handlers;

fn samples_arg() -> Arg {
    Arg::new("values")
        .required(true)
        .num_args(1..)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
        .help("Real-valued samples")
}

fn cli() -> Command {
    let config = utils::Config::from_env();
    Command::new("fourier")
        .about("Discrete Fourier, cosine and fast Fourier transforms")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("dft").about("Naive O(n^2) Fourier transform").arg(samples_arg()))
        .subcommand(Command::new("dct").about("Unnormalized type-II cosine transform").arg(samples_arg()))
        .subcommand(
            Command::new("fft")
                .about("Radix-2 Cooley-Tukey transform (length must be a power of two)")
                .arg(samples_arg()),
        )
        .subcommand(
            Command::new("bench")
                .about("Time every transform on background workers")
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .value_parser(value_parser!(usize))
                        .default_value(config.bench_size.to_string())
                        .help("Number of samples per run"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .default_value(config.bench_seed.to_string())
                        .help("Seed for the random inputs"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the timing reports as JSON"),
                ),
        )
        .subcommand(
            Command::new("spectrum")
                .about("Strongest frequencies of a 16-bit PCM WAV file")
                .arg(Arg::new("path").required(true).help("Path to wav file"))
                .arg(
                    Arg::new("bins")
                        .short('b')
                        .long("bins")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the peaks as JSON"),
                ),
        )
        .subcommand(
            Command::new("tone")
                .about("Write a sine tone as a 16-bit PCM WAV file")
                .arg(Arg::new("path").required(true).help("Output wav file"))
                .arg(
                    Arg::new("freq")
                        .short('f')
                        .long("freq")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("rate")
                        .short('r')
                        .long("rate")
                        .value_parser(value_parser!(u32))
                        .default_value("44100"),
                )
                .arg(
                    Arg::new("seconds")
                        .short('s')
                        .long("seconds")
                        .value_parser(value_parser!(f64))
                        .default_value("1.0"),
                ),
        )
}

fn values(matches: &ArgMatches) -> Vec<f64> {
    matches
        .get_many::<f64>("values")
        .map(|v| v.copied().collect())
        .unwrap_or_default()
}

fn run(matches: ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("dft", m)) => command_handlers::transform(TransformKind::Dft, &values(m)),
        Some(("dct", m)) => command_handlers::transform(TransformKind::Dct, &values(m)),
        Some(("fft", m)) => command_handlers::transform(TransformKind::Fft, &values(m)),
        Some(("bench", m)) => {
            let size = m.get_one::<usize>("size").copied().unwrap_or_default();
            let seed = m.get_one::<u64>("seed").copied().unwrap_or_default();
            let json = m.get_flag("json");
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(command_handlers::bench(size, seed, json))
        }
        Some(("spectrum", m)) => {
            let path = m.get_one::<String>("path").map(String::as_str).unwrap_or_default();
            let bins = m.get_one::<usize>("bins").copied().unwrap_or(5);
            command_handlers::spectrum(path, bins, m.get_flag("json"))
        }
        Some(("tone", m)) => {
            let path = m.get_one::<String>("path").map(String::as_str).unwrap_or_default();
            let freq = m.get_one::<f64>("freq").copied().unwrap_or_default();
            let rate = m.get_one::<u32>("rate").copied().unwrap_or(44100);
            let seconds = m.get_one::<f64>("seconds").copied().unwrap_or(1.0);
            command_handlers::tone(path, freq, rate, seconds)
        }
        _ => unreachable!("clap enforces a subcommand"),
    }
}

fn main() {
    let matches = cli().get_matches();
    if let Err(e) = run(matches) {
        let logger = utils::get_logger();
        error!(logger.new(utils::fmt_err(&*e)), "command failed");
        println!("{}", format!("Error: {:#}", e).yellow());
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_parses_negative_samples() {
        let matches = cli().try_get_matches_from(["fourier", "fft", "1", "-2", "3.5", "0"]).unwrap();
        let (name, m) = matches.subcommand().unwrap();
        assert_eq!(name, "fft");
        assert_eq!(values(m), vec![1.0, -2.0, 3.5, 0.0]);
    }

    #[test]
    fn test_bench_defaults() {
        let matches = cli().try_get_matches_from(["fourier", "bench", "--json"]).unwrap();
        let (_, m) = matches.subcommand().unwrap();
        assert!(m.get_flag("json"));
        assert!(m.get_one::<usize>("size").is_some());
    }

    #[test]
    fn test_spectrum_json_flag() {
        let matches = cli().try_get_matches_from(["fourier", "spectrum", "a.wav", "-b", "3", "--json"]).unwrap();
        let (name, m) = matches.subcommand().unwrap();
        assert_eq!(name, "spectrum");
        assert_eq!(m.get_one::<usize>("bins"), Some(&3));
        assert!(m.get_flag("json"));
    }
}
