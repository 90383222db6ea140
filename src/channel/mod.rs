
use rand::Rng;

/* Memoryless binary symmetric channel: every bit of a transmitted word flips
independently with probability 1/denominator.  The denominator form matches
the way the bit error rate is quoted for this kind of simulation, e.g.
BER 1/1000 rather than 0.001. */
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BinarySymmetricChannel {
	ber_denom: u32,
}

impl BinarySymmetricChannel {

	pub fn new(ber_denom:u32) -> Self {
		Self{ ber_denom }
	}

	// Returns the word as received plus the number of bits the channel
	// flipped.  Bits at positions width and above are never touched.
	pub fn transmit<R: Rng>(&self, rng:&mut R, word:u64, width:u32) -> (u64, u32) {

		let mut received:u64 = word;
		let mut flipped:u32 = 0;

		for j in 0..width {
			if rng.gen_ratio(1, self.ber_denom) {
				received = received ^ (1u64 << j);
				flipped += 1;
			}
		}

		(received, flipped)
	}

}
