
use ::serde::{Serialize, Deserialize};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tokio::task::JoinHandle;

use crate::channel::BinarySymmetricChannel;
use crate::crc;
use crate::poly::GeneratorPoly;
use crate::{CrcSimErr, Frame};


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SimConfig {
	pub k: u32,          // data bits per frame
	pub frames: u64,
	pub ber_denom: u32,  // each bit flips with probability 1/ber_denom
}

impl Default for SimConfig {
	fn default() -> Self {
		Self{ k: 20, frames: 1_000_000, ber_denom: 1_000 }
	}
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SimReport {
	pub frames: u64,
	pub errors: u64,      // frames the channel altered
	pub failed: u64,      // frames the CRC rejected
	pub undetected: u64,  // altered frames the CRC accepted
}

impl SimReport {

	pub fn combine(self, other:Self) -> Self {
		Self{
			frames:     self.frames     + other.frames,
			errors:     self.errors     + other.errors,
			failed:     self.failed     + other.failed,
			undetected: self.undetected + other.undetected,
		}
	}

	pub fn error_pct_of_frames(&self) -> f64 { pct(self.errors, self.frames) }
	pub fn failed_pct_of_frames(&self) -> f64 { pct(self.failed, self.frames) }
	pub fn failed_pct_of_errors(&self) -> f64 { pct(self.failed, self.errors) }
	pub fn undetected_pct_of_errors(&self) -> f64 { pct(self.undetected, self.errors) }

}

fn pct(num:u64, denom:u64) -> f64 {
	if denom == 0 { 0.0 } else { 100.0 * (num as f64) / (denom as f64) }
}

fn check_frame_spec(cfg:&SimConfig, poly:&GeneratorPoly) -> Result<(), CrcSimErr> {
	if cfg.k == 0 {
		Err(CrcSimErr::InvalidFrameSpec("Frames need at least one data bit"))
	} else if cfg.k > poly.max_data_bits() {
		Err(CrcSimErr::InvalidFrameSpec("Data plus FCS must fit the 64-bit register"))
	} else if cfg.ber_denom == 0 {
		Err(CrcSimErr::InvalidFrameSpec("The bit error rate denominator must be nonzero"))
	} else {
		Ok(())
	}
}

/// Transmits cfg.frames random frames through a noisy channel and tallies
/// how the CRC check fared against the errors actually injected.
pub fn run<R: Rng>(cfg:&SimConfig, poly:&GeneratorPoly, rng:&mut R) -> Result<SimReport, CrcSimErr> {

	check_frame_spec(cfg, poly)?;

	let chan = BinarySymmetricChannel::new(cfg.ber_denom);
	let mut report = SimReport{ frames: cfg.frames, ..Default::default() };

	for _ in 0..cfg.frames {

		let data:u64 = rng.gen::<u64>() >> (64 - cfg.k);
		let frame = Frame{ data, fcs: crc::compute_fcs(data, cfg.k, poly.bits, poly.degree) };

		// Data and FCS cross the channel independently
		let (rx_data, data_flips) = chan.transmit(rng, frame.data, cfg.k);
		let (rx_fcs, fcs_flips) = chan.transmit(rng, frame.fcs, poly.degree);

		let altered = data_flips + fcs_flips > 0;
		if altered { report.errors += 1; }

		if crc::verify(rx_data, cfg.k, poly.bits, poly.degree, rx_fcs) {
			if altered { report.undetected += 1; }
		} else {
			report.failed += 1;
		}

	}

	Ok(report)
}

/* Frames are independent, so the frame budget can be split across tasks:
each task runs the same loop on its own seeded RNG and the partial reports
are summed at the end.  The encode/inject/verify order of any one frame is
preserved inside its task; nothing is promised about ordering across
frames. */
pub async fn run_concurrent(cfg:&SimConfig, poly:&GeneratorPoly, num_tasks:u32, seed:u64) -> Result<SimReport, CrcSimErr> {

	check_frame_spec(cfg, poly)?;
	if num_tasks == 0 {
		return Err(CrcSimErr::InvalidFrameSpec("The simulation needs at least one task"));
	}

	let frames_per_task:u64 = cfg.frames / (num_tasks as u64);
	let leftover:u64 = cfg.frames % (num_tasks as u64);

	let mut handles:Vec<JoinHandle<Result<SimReport, CrcSimErr>>> = vec![];
	for task_idx in 0..num_tasks {

		let task_cfg = SimConfig{
			frames: frames_per_task + (if (task_idx as u64) < leftover { 1 } else { 0 }),
			..*cfg
		};
		let task_poly = *poly;

		handles.push(tokio::spawn(async move {
			let mut rng = StdRng::seed_from_u64(seed.wrapping_add(task_idx as u64));
			run(&task_cfg, &task_poly, &mut rng)
		}));
	}

	let mut total = SimReport::default();
	for handle in handles {
		let partial = handle.await.map_err(|_| CrcSimErr::Other("A simulation task panicked"))??;
		total = total.combine(partial);
	}

	Ok(total)
}
