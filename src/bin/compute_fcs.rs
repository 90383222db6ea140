
extern crate crc_sim;

use std::env;

use crc_sim::crc;
use crc_sim::poly::GeneratorPoly;
use crc_sim::utils::bits;

fn parse_binary_digits(s:&str) -> Vec<bool> {
	s.chars().map(|c| match c {
		'0' => false,
		'1' => true,
		x => panic!("{} isn't a binary digit", x),
	}).collect()
}

fn main() {

	let args:Vec<String> = env::args().collect();
	let mut arg_iter = args.iter();
	arg_iter.next();	// throw away the first element, which is just the filename of the binary

	let mut poly_str:Option<String> = None;
	let mut data_str:Option<String> = None;
	let mut fcs_str:Option<String> = None;

	while let Some(ref arg) = arg_iter.next() {
		if *arg == "-h" || *arg == "--help" || !arg.starts_with("-") {
			println!("Available command line arguments for compute_fcs");
			println!("-p or --poly  Generator polynomial as binary digits, e.g. 1011");
			println!("-d or --data  Data word as binary digits, MSB first");
			println!("-f or --fcs   Received FCS as binary digits; if given, the frame is checked instead of encoded");
			return;
		}

		let next_arg = match arg_iter.next() {
			Some(x) => x,
			None => panic!("All arguments except -h or --help must come in pairs"),
		};

		match arg.as_ref() {
			"-p" | "--poly" => poly_str = Some(next_arg.to_string()),
			"-d" | "--data" => data_str = Some(next_arg.to_string()),
			"-f" | "--fcs"  => fcs_str = Some(next_arg.to_string()),
			_               => panic!("Unrecognized arguments: {:?} {:?}", arg, next_arg),
		}
	}

	let poly = match GeneratorPoly::from_binary_str(&poly_str.expect("A generator polynomial is required; see -h")) {
		Ok(p) => p,
		Err(e) => panic!("{:?}", e),
	};

	let data_digits:String = data_str.expect("A data word is required; see -h");
	let k:u32 = data_digits.chars().count() as u32;
	if k == 0 || k > poly.max_data_bits() {
		panic!("The data word must be 1 to {} bits for this generator", poly.max_data_bits());
	}
	let data:u64 = bits::to_u64(&parse_binary_digits(&data_digits)).unwrap();

	match fcs_str {
		Some(fcs_digits) => {
			if fcs_digits.chars().count() as u32 != poly.fcs_bits() {
				panic!("The FCS must be exactly {} bits for this generator", poly.fcs_bits());
			}
			let fcs:u64 = bits::to_u64(&parse_binary_digits(&fcs_digits)).unwrap();

			if crc::verify(data, k, poly.bits, poly.degree, fcs) {
				println!("CRC passed");
			} else {
				println!("CRC failed");
			}
		},
		None => {
			let fcs:u64 = crc::compute_fcs(data, k, poly.bits, poly.degree);
			println!("{}", bits::to_binary_string(fcs, poly.fcs_bits()));
		}
	}

}
