use std::collections::BTreeMap;

use pair_rounds::{solve, Roster};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const RUNS_PER_SIZE: u64 = 2000;

fn main() {
	for &count in &[8, 9, 17, 18, 24] {
		let mut round_counts: BTreeMap<usize, u64> = BTreeMap::new();
		let mut runs_with_consecutive_byes = 0;
		for run in 0..RUNS_PER_SIZE {
			let mut roster = random_roster(count, count as u64 * 10_000 + run);
			solve(&mut roster).unwrap();
			*round_counts.entry(roster.schedule_len()).or_insert(0) += 1;
			if has_consecutive_byes(&roster) {
				runs_with_consecutive_byes += 1;
			}
		}

		println!("{} attendees, {} runs with random already-met graphs:", count, RUNS_PER_SIZE);
		for (rounds, occurrences) in &round_counts {
			println!("  {} rounds in {} runs", rounds, occurrences);
		}
		println!("  somebody sat out twice in a row in {} runs", runs_with_consecutive_byes);
	}
}

/// A full-attendance roster where up to a quarter of all pairs already met, so
/// the solver starts from an irregular relation.
fn random_roster(count: usize, seed: u64) -> Roster {
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	let mut roster = Roster::new();
	for i in 0..count {
		roster.add_attendee(format!("P{}", i + 1), true);
	}
	let edges = rng.gen_range(0..=count * (count - 1) / 8);
	let mut placed = 0;
	while placed < edges {
		let a = rng.gen_range(0..count);
		let b = rng.gen_range(0..count);
		if a != b && !roster.has_met(a, b) {
			roster.record_met(a, b);
			placed += 1;
		}
	}
	roster
}

fn has_consecutive_byes(roster: &Roster) -> bool {
	(0..roster.len()).any(|id| {
		roster
			.attendee(id)
			.schedule()
			.windows(2)
			.any(|pair| pair[0].is_bye() && pair[1].is_bye())
	})
}
