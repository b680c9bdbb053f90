use crate::error::GameClockError;
use crate::schema::{ClockReading, OvertimeLength, Quarter, QUARTER_MINUTES, QUARTER_SECONDS};
use std::ops::AddAssign;

/// Minutes between each reading and the next one, for a countdown clock.
///
/// A reading higher than its predecessor means the clock was reset for a new
/// quarter, so the gap is what was left of the old quarter plus what has
/// already run off the new one. The last slot has no successor and holds the
/// final reading unchanged.
pub fn elapsed(times: &[f64]) -> Result<Vec<f64>, GameClockError> {
	let last = *times.last().ok_or(GameClockError::EmptySequence)?;

	let mut gaps: Vec<f64> = times
		.windows(2)
		.map(|pair| {
			let (current, next) = (pair[0], pair[1]);
			if current > next {
				current - next
			} else if current < next {
				current + (QUARTER_MINUTES - next)
			} else {
				0.0
			}
		})
		.collect();
	gaps.push(last);

	Ok(gaps)
}

/// [`elapsed`] in whole seconds, where a change of quarter always counts
/// as a clock reset and any quarter skipped in between adds its full length.
///
/// Sparse sequences such as drive starts can cross a quarter while the clock
/// still reads lower than before; the clock alone would miss that reset.
/// Each new period restarts from its own length, so a regular-season
/// overtime picks up at 10:00.
pub fn elapsed_by_quarter(readings: &[(Quarter, ClockReading)], overtime: OvertimeLength) -> Result<Vec<u32>, GameClockError> {
	let (_, last) = readings.last().ok_or(GameClockError::EmptySequence)?;

	let mut gaps: Vec<u32> = readings
		.windows(2)
		.map(|pair| {
			let ((quarter, current), (next_quarter, next)) = (pair[0], pair[1]);
			let (current, next) = (current.seconds_remaining(), next.seconds_remaining());
			let restart = next_quarter.length_seconds(overtime).saturating_sub(next);

			if next_quarter > quarter {
				let skipped = u32::from(next_quarter.number() - quarter.number() - 1);
				current + skipped * QUARTER_SECONDS + restart
			} else if current >= next {
				current - next
			} else {
				current + restart
			}
		})
		.collect();
	gaps.push(last.seconds_remaining());

	Ok(gaps)
}

/// Running total before each step: `out[0]` is zero and `out[i]` sums
/// `elapsed[..i]`, so the final gap is never added.
pub fn cumulative<T>(elapsed: &[T]) -> Result<Vec<T>, GameClockError>
where
	T: Copy + Default + AddAssign,
{
	let Some((_, steps)) = elapsed.split_last() else {
		return Err(GameClockError::EmptySequence);
	};

	let totals = steps.iter().scan(T::default(), |total, step| {
		*total += *step;
		Some(*total)
	});

	Ok(std::iter::once(T::default()).chain(totals).collect())
}

/// Whole seconds since kickoff at each reading, readings in chronological order.
pub fn game_seconds(clocks: &[(Quarter, ClockReading)], overtime: OvertimeLength) -> Result<Vec<u32>, GameClockError> {
	cumulative(&elapsed_by_quarter(clocks, overtime)?)
}
