
extern crate clap;
extern crate colored;
extern crate rand;
extern crate serde_json;
extern crate tokio;
extern crate crc_sim;

use std::fs::File;
use std::io::BufReader;

use clap::{Arg, App};
use colored::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crc_sim::CrcSimErr;
use crc_sim::poly::GeneratorPoly;
use crc_sim::sim::{self, SimConfig, SimReport};

#[tokio::main]
async fn main() -> Result<(), CrcSimErr> {

	let matches = App::new("CRC Monte Carlo")
		.version("0.1.0")
		.about("Injects random bit errors into CRC-protected frames and measures how many the check catches")
		.arg(Arg::with_name("poly")
			.long("poly")
			.help("Generator polynomial as binary digits, e.g. 1011 for x^3 + x + 1")
			.takes_value(true).required(true))
		.arg(Arg::with_name("k")
			.long("k")
			.help("Data bits per frame (default=20)")
			.takes_value(true))
		.arg(Arg::with_name("frames")
			.long("frames")
			.help("Number of frames to transmit (default=1000000)")
			.takes_value(true))
		.arg(Arg::with_name("ber")
			.long("ber")
			.help("Bit error rate denominator; each bit flips with probability 1/ber (default=1000)")
			.takes_value(true))
		.arg(Arg::with_name("num_tasks")
			.long("num_tasks")
			.help("Number of concurrent simulation tasks (default=1)")
			.takes_value(true))
		.arg(Arg::with_name("seed")
			.long("seed")
			.help("RNG seed, for reproducible runs; random if not given")
			.takes_value(true))
		.arg(Arg::with_name("json_file")
			.long("json_file")
			.help("JSON file the report is appended to")
			.takes_value(true))
		.get_matches();

	let poly = match GeneratorPoly::from_binary_str(matches.value_of("poly").unwrap()) {
		Ok(p) => p,
		Err(e) => {
			eprintln!("{}", format!("Invalid polynomial: {:?}", e).red());
			return Err(e);
		}
	};

	let cfg = SimConfig{
		k:         matches.value_of("k").unwrap_or("20").parse().unwrap_or(20),
		frames:    matches.value_of("frames").unwrap_or("1000000").parse().unwrap_or(1_000_000),
		ber_denom: matches.value_of("ber").unwrap_or("1000").parse().unwrap_or(1_000),
	};
	let num_tasks:u32 = matches.value_of("num_tasks").unwrap_or("1").parse().unwrap_or(1);
	let seed:u64 = match matches.value_of("seed") {
		Some(s) => s.parse().unwrap_or(0),
		None => rand::random(),
	};

	eprintln!("Transmitting {} frames of {} data bits + {} FCS bits, BER 1/{}, generator {}",
		cfg.frames, cfg.k, poly.fcs_bits(), cfg.ber_denom, &poly);

	let report:SimReport = if num_tasks > 1 {
		sim::run_concurrent(&cfg, &poly, num_tasks, seed).await?
	} else {
		let mut rng = StdRng::seed_from_u64(seed);
		sim::run(&cfg, &poly, &mut rng)?
	};

	println!("");
	println!("{} frames transmitted", report.frames);
	println!("Errors in transmission:\t{}\t{:.3}% of frames", report.errors, report.error_pct_of_frames());
	println!("{}", format!("CRC detected errors:\t{}\t{:.3}% of frames, {:.3}% of errors",
		report.failed, report.failed_pct_of_frames(), report.failed_pct_of_errors()).green());

	let undetected_line = format!("CRC undetected errors:\t{}\t{:.3}% of errors",
		report.undetected, report.undetected_pct_of_errors());
	if report.undetected > 0 {
		println!("{}", undetected_line.red());
	} else {
		println!("{}", undetected_line.green());
	}

	// Append this run to the JSON report file if one was requested
	if let Some(json_filename) = matches.value_of("json_file") {

		let mut all_reports:Vec<SimReport> = match File::open(json_filename) {
			Ok(json_file) => serde_json::from_reader(BufReader::new(json_file)).unwrap_or(vec![]),
			Err(_) => vec![],
		};
		all_reports.push(report);

		let json_file = File::create(json_filename).map_err(|_| CrcSimErr::Other("Unable to create the JSON report file"))?;
		serde_json::to_writer_pretty(json_file, &all_reports).map_err(|_| CrcSimErr::Other("Unable to write the JSON report"))?;
		eprintln!("Appended this report to {}", json_filename);
	}

	Ok(())
}
