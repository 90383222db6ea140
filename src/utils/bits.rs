
use crate::CrcSimErr;

// MSB-first expansion of the low `width` bits of a word
pub fn to_bools(word:u64, width:u32) -> Vec<bool> {
	(0..width).rev().map(|i| (word >> i) & 1 == 1).collect()
}

pub fn to_u64(bools:&[bool]) -> Result<u64, CrcSimErr> {
	let n = bools.len();
	if n <= 64 {
		Ok((0..n).filter(|i| bools[*i]).map(|i| 1u64 << (n-i-1)).fold(0u64, |acc, x| acc | x))
	} else {
		Err(CrcSimErr::Other("bools.len() > 64 in bits::to_u64"))
	}
}

pub fn to_binary_string(word:u64, width:u32) -> String {
	(0..width).rev().map(|i| if (word >> i) & 1 == 1 { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn round_trips_msb_first() {
		let bools = to_bools(0b1011, 4);
		assert_eq!(bools, vec![true, false, true, true]);
		assert_eq!(to_u64(&bools).unwrap(), 0b1011);
		assert_eq!(to_binary_string(0b1011, 6), "001011");
	}

	#[test]
	fn rejects_oversized_slices() {
		assert!(to_u64(&vec![true; 65]).is_err());
		assert_eq!(to_u64(&vec![true; 64]).unwrap(), u64::max_value());
	}

}
