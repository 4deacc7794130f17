//! Cycle detection by state fingerprinting, with period folding.

use rustc_hash::FxHashMap;

/// A deterministic step-by-step process whose state can be summarized by a
/// compact fingerprint and whose progress is a monotone scalar metric.
///
/// The fingerprint must capture everything the next steps depend on,
/// including which element of any repeating driver sequence applies next;
/// two states with equal fingerprints must evolve identically (up to a
/// constant shift of the metric).
pub trait PeriodicSim {
    /// Compact summary of the current structural state plus driver indices.
    fn fingerprint(&self) -> u64;

    /// Cumulative progress metric (e.g. tower height).
    fn metric(&self) -> u64;

    /// Advance by one step.
    fn step(&mut self);

    /// Jump forward by `periods` whole periods, each adding `metric_delta`
    /// to the metric, without simulating the intermediate steps.
    fn fast_forward(&mut self, periods: u64, metric_delta: u64);
}

/// Run `sim` for `target_steps` steps, folding over whole periods once a
/// fingerprint repeats, and return the final metric.
///
/// Every observed fingerprint is recorded with the step index and metric at
/// first sighting. A repeat means the interval since that sighting is one
/// full period, and the metric delta over it applies uniformly to every
/// whole period that still fits before `target_steps`; the remainder is
/// simulated normally. If no fingerprint repeats before the target, the
/// direct simulation result is returned — folding is an optimization, not a
/// required path.
pub fn simulate_with_folding<S: PeriodicSim>(sim: &mut S, target_steps: u64) -> u64 {
    let mut seen: FxHashMap<u64, (u64, u64)> = FxHashMap::default();
    let mut steps_done = 0u64;

    while steps_done < target_steps {
        let fingerprint = sim.fingerprint();
        if let Some(&(first_step, first_metric)) = seen.get(&fingerprint) {
            let period = steps_done - first_step;
            let delta = sim.metric() - first_metric;
            let periods = (target_steps - steps_done) / period;
            sim.fast_forward(periods, delta);
            steps_done += periods * period;
            break;
        }

        seen.insert(fingerprint, (steps_done, sim.metric()));
        sim.step();
        steps_done += 1;
    }

    while steps_done < target_steps {
        sim.step();
        steps_done += 1;
    }

    sim.metric()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds `pattern[step % len]` to the metric each step after a short
    /// non-repeating prefix, so a genuine period exists but does not start
    /// at step 0.
    struct PatternSim {
        pattern: Vec<u64>,
        prefix: u64,
        step: u64,
        total: u64,
        folded: bool,
    }

    impl PatternSim {
        fn new(pattern: Vec<u64>, prefix: u64) -> Self {
            Self { pattern, prefix, step: 0, total: 0, folded: false }
        }
    }

    impl PeriodicSim for PatternSim {
        fn fingerprint(&self) -> u64 {
            if self.step < self.prefix {
                // Distinct fingerprints during the prefix.
                u64::MAX - self.step
            } else {
                (self.step - self.prefix) % self.pattern.len() as u64
            }
        }

        fn metric(&self) -> u64 {
            self.total
        }

        fn step(&mut self) {
            let gain = if self.step < self.prefix {
                7
            } else {
                self.pattern[((self.step - self.prefix) % self.pattern.len() as u64) as usize]
            };
            self.total += gain;
            self.step += 1;
        }

        fn fast_forward(&mut self, periods: u64, metric_delta: u64) {
            self.folded = true;
            self.total += periods * metric_delta;
            self.step += periods * self.pattern.len() as u64;
        }
    }

    fn direct(pattern: &[u64], prefix: u64, steps: u64) -> u64 {
        let mut sim = PatternSim::new(pattern.to_vec(), prefix);
        for _ in 0..steps {
            sim.step();
        }
        sim.metric()
    }

    #[test]
    fn folded_matches_direct_across_periods() {
        let pattern = [1, 2, 3, 4, 5];
        for steps in [47, 12, 25, 99] {
            let mut sim = PatternSim::new(pattern.to_vec(), 3);
            let folded = simulate_with_folding(&mut sim, steps);
            assert_eq!(folded, direct(&pattern, 3, steps), "steps = {steps}");
        }
    }

    #[test]
    fn folding_actually_skips() {
        let mut sim = PatternSim::new(vec![1, 2, 3, 4, 5], 3);
        simulate_with_folding(&mut sim, 47);
        assert!(sim.folded);
    }

    #[test]
    fn short_run_never_needs_a_period() {
        let mut sim = PatternSim::new(vec![1, 2, 3, 4, 5], 3);
        let result = simulate_with_folding(&mut sim, 4);
        assert!(!sim.folded);
        assert_eq!(result, direct(&[1, 2, 3, 4, 5], 3, 4));
    }
}
