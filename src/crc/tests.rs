
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::crc;
use crate::utils::bits;

#[test]
fn worked_example() {
	// data 11010110 with generator 1011 (x^3 + x + 1): the remainder of
	// 11010110000 divided by 1011 is 111
	let fcs = crc::compute_fcs(0b11010110, 8, 0b1011, 3);
	assert_eq!(fcs, 0b111);
	assert_eq!(fcs, crc::divide(0b11010110000, 11, 0b1011, 3));
	assert!(crc::verify(0b11010110, 8, 0b1011, 3, fcs));

	// A stale FCS must not survive a data bit flip
	assert!(!crc::verify(0b11010111, 8, 0b1011, 3, fcs));
}

#[test]
fn textbook_14_bit_vector() {
	assert_eq!(crc::compute_fcs(0b11010011101100, 14, 0b1011, 3), 0b100);
	assert!(crc::verify(0b11010011101100, 14, 0b1011, 3, 0b100));
}

#[test]
fn round_trip_and_range_over_random_frames() {

	let mut rng = StdRng::seed_from_u64(1);

	// Generators of several degrees, MSB and LSB both set; the last one is
	// the CRC-32 polynomial with its implicit leading 1 written out
	let generators:[(u64, u32); 4] = [(0b11, 1), (0b1011, 3), (0b10011, 4), (0x1_04C1_1DB7, 32)];

	for &(g, r) in generators.iter() {
		for _ in 0..500 {
			let k:u32 = rng.gen_range(1, 64 - r + 1);
			let data:u64 = rng.gen::<u64>() >> (64 - k);

			let fcs = crc::compute_fcs(data, k, g, r);
			assert!(fcs < (1u64 << r));
			assert!(crc::verify(data, k, g, r, fcs));
		}
	}
}

#[test]
fn single_bit_errors_always_detected() {

	// The generator has more than one nonzero term, so no single-bit error
	// pattern is a multiple of it
	let g:u64 = 0b1011;
	let r:u32 = 3;
	let k:u32 = 20;

	let mut rng = StdRng::seed_from_u64(2);
	for _ in 0..100 {
		let data:u64 = rng.gen::<u64>() >> (64 - k);
		let fcs = crc::compute_fcs(data, k, g, r);

		for j in 0..k {
			assert!(!crc::verify(data ^ (1u64 << j), k, g, r, fcs));
		}
		for j in 0..r {
			assert!(!crc::verify(data, k, g, r, fcs ^ (1u64 << j)));
		}
	}
}

#[test]
fn slice_engine_matches_register_engine() {

	let mut rng = StdRng::seed_from_u64(3);
	let g:u64 = 0b10011;
	let r:u32 = 4;

	for _ in 0..200 {
		let k:u32 = rng.gen_range(1, 61);
		let data:u64 = rng.gen::<u64>() >> (64 - k);

		let fcs = crc::compute_fcs(data, k, g, r);
		let fcs_bits = crc::compute_fcs_bits(&bits::to_bools(data, k), &bits::to_bools(g, r + 1));

		assert_eq!(bits::to_u64(&fcs_bits).unwrap(), fcs);
		assert!(crc::verify_bits(&bits::to_bools(data, k), &bits::to_bools(g, r + 1), &fcs_bits));
	}
}

#[test]
fn wide_frames_round_trip() {

	let mut rng = StdRng::seed_from_u64(4);
	let generator:Vec<bool> = bits::to_bools(0b1011, 4);

	// 300 data bits, well past what the 64-bit register can hold
	let data:Vec<bool> = (0..300).map(|_| rng.gen::<bool>()).collect();
	let fcs = crc::compute_fcs_bits(&data, &generator);
	assert_eq!(fcs.len(), 3);
	assert!(crc::verify_bits(&data, &generator, &fcs));

	let mut altered = data.clone();
	altered[137] = !altered[137];
	assert!(!crc::verify_bits(&altered, &generator, &fcs));
}
