//! CycleAssigner - Single-Cycle Target Rounds
//!
//! TigerStyle: Plan every round, then commit. A failed assignment leaves the
//! roster exactly as it was.
//!
//! # Design
//!
//! Round 1 lays the roster out in a uniformly random order and lets each
//! participant target the next one around the circle. Relabeling the
//! canonical N-cycle can never produce a fixed point or a sub-cycle.
//!
//! Round 2 rearranges that circle once more. A candidate rearrangement `p`
//! pins `p[0] == 0` and is accepted only if no circle position is followed,
//! in `p`, by either of its round-1 neighbours. That rules out repeating a
//! round-1 target and targeting one's own round-1 hunter.

use tracing::{debug, info, warn};

use super::participant::Roster;
use crate::constants::{
    ASSIGNMENT_ATTEMPTS_COUNT_MAX, PARTICIPANTS_COUNT_MIN, ROUNDS_COUNT_MAX, ROUNDS_COUNT_MIN,
    TARGETS_FRACTION_DECENT_MAX,
};
use crate::error::{AssignResult, AssignmentError, DomainError, DomainResult};
use crate::permutation::{Permutation, PermutationCodec};
use crate::random::RandomStream;

/// Outcome of the bounded round-2 search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilitySearch {
    /// A compatible permutation was drawn
    Found {
        /// The compatible permutation (circle positions, `p[0] == 0`)
        permutation: Permutation,
        /// Attempts used, including the successful one
        attempts: u32,
    },
    /// Every attempt was incompatible
    Exhausted {
        /// Attempts made
        attempts: u32,
    },
}

/// Whether `p` may rearrange a round-1 circle into a round-2 circle.
///
/// Requires `p[0] == 0`, and for every value `i` the value following it in
/// `p` must be neither `i + 1` nor `i - 1` (mod N).
#[must_use]
pub fn is_compatible(p: &Permutation) -> bool {
    let n = p.len();
    if n == 0 || p[0] != 0 {
        return false;
    }

    let positions = p.inverse();
    (0..n).all(|i| {
        let next = p.cyclic_next(positions[i]);
        next != (i + 1) % n && next != (i + n - 1) % n
    })
}

/// Check a participant count and round count before any randomness is used.
///
/// # Errors
/// Returns error if `rounds` is unsupported or there are fewer than
/// `rounds + 1` participants.
pub fn validate(participants: usize, rounds: usize) -> DomainResult<()> {
    if !(ROUNDS_COUNT_MIN..=ROUNDS_COUNT_MAX).contains(&rounds) {
        return Err(DomainError::RoundsOutOfRange {
            rounds,
            min: ROUNDS_COUNT_MIN,
            max: ROUNDS_COUNT_MAX,
        });
    }

    let required = (rounds + 1).max(PARTICIPANTS_COUNT_MIN);
    if participants < required {
        return Err(DomainError::InsufficientParticipants {
            count: participants,
            required,
        });
    }

    Ok(())
}

/// Builds single-cycle target rounds.
///
/// # Example
///
/// ```rust
/// use killer_core::assignment::{CycleAssigner, Roster};
/// use killer_core::random::RandomStream;
///
/// let mut roster = Roster::from_names(["Ann", "Ben", "Cid", "Dan", "Eve"]).unwrap();
/// let mut rng = RandomStream::from_seed("party");
/// CycleAssigner::new().assign(&mut roster, 2, &mut rng).unwrap();
///
/// for participant in roster.participants() {
///     assert_eq!(participant.targets().len(), 2);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CycleAssigner {
    codec: PermutationCodec,
    attempts_max: u32,
    decent_fraction: f64,
}

impl CycleAssigner {
    /// Create an assigner with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            codec: PermutationCodec::new(),
            attempts_max: ASSIGNMENT_ATTEMPTS_COUNT_MAX,
            decent_fraction: TARGETS_FRACTION_DECENT_MAX,
        }
    }

    /// Set the round-2 attempt budget.
    ///
    /// # Panics
    /// Panics if `attempts_max` is zero.
    #[must_use]
    pub fn with_attempts_max(mut self, attempts_max: u32) -> Self {
        assert!(attempts_max > 0, "attempts_max must be positive");
        self.attempts_max = attempts_max;
        self
    }

    /// Set the share of the player count above which a warning is logged.
    ///
    /// # Panics
    /// Panics if `fraction` is not in [0, 1].
    #[must_use]
    pub fn with_decent_fraction(mut self, fraction: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fraction),
            "fraction must be in [0, 1], got {fraction}"
        );
        self.decent_fraction = fraction;
        self
    }

    /// Round-2 attempt budget.
    #[must_use]
    pub fn attempts_max(&self) -> u32 {
        self.attempts_max
    }

    /// Assign `rounds` targets to every participant.
    ///
    /// # Errors
    /// Returns a domain error for unsupported input and an assignment error
    /// when the round-2 search runs out of attempts. On error no targets are
    /// added.
    #[tracing::instrument(skip(self, roster, rng), fields(participants = roster.len(), seed = rng.used_seed()))]
    pub fn assign(
        &mut self,
        roster: &mut Roster,
        rounds: usize,
        rng: &mut RandomStream,
    ) -> AssignResult<()> {
        let cycles = self.plan(roster.len(), rounds, rng)?;
        for cycle in &cycles {
            roster.commit_cycle(cycle);
        }

        // Postcondition
        debug_assert!(
            roster
                .participants()
                .iter()
                .all(|p| p.targets().len() >= cycles.len()),
            "every participant must gain one target per round"
        );
        info!(rounds = cycles.len(), draws = rng.draws(), "targets assigned");
        Ok(())
    }

    /// Plan the cycles for `rounds` rounds over `n` participants.
    ///
    /// Each returned permutation lists participant indices in cycle order.
    ///
    /// # Errors
    /// Same as [`CycleAssigner::assign`].
    pub fn plan(
        &mut self,
        n: usize,
        rounds: usize,
        rng: &mut RandomStream,
    ) -> AssignResult<Vec<Permutation>> {
        validate(n, rounds)?;

        #[allow(clippy::cast_precision_loss)]
        let crowded = rounds as f64 > n as f64 * self.decent_fraction;
        if crowded {
            warn!(
                rounds,
                participants = n,
                "target count is a large share of the player count; assignment may fail"
            );
        }

        let first = self.codec.random_permutation(rng, n)?;
        let mut cycles = vec![first];

        if rounds == 2 {
            match self.search_compatible(n, rng)? {
                CompatibilitySearch::Found {
                    permutation,
                    attempts,
                } => {
                    debug!(attempts, "compatible round-2 permutation found");
                    let second = cycles[0].compose(&permutation)?;
                    cycles.push(second);
                }
                CompatibilitySearch::Exhausted { attempts } => {
                    warn!(attempts, "round-2 search exhausted");
                    return Err(AssignmentError::NoCompatiblePermutation { attempts }.into());
                }
            }
        }

        Ok(cycles)
    }

    /// Draw round-2 candidates until one is compatible or the budget is spent.
    ///
    /// Candidates pin position 0 and draw the rest from the `(n-1)!`
    /// arrangements of the remaining positions.
    ///
    /// # Errors
    /// Returns error if `n` is zero or too large for the codec.
    pub fn search_compatible(
        &mut self,
        n: usize,
        rng: &mut RandomStream,
    ) -> DomainResult<CompatibilitySearch> {
        if n == 0 {
            return Err(DomainError::InsufficientParticipants {
                count: 0,
                required: 1,
            });
        }

        let mut attempts: u32 = 0;
        while attempts < self.attempts_max {
            attempts += 1;
            let rest = self.codec.random_permutation(rng, n - 1)?;
            let values: Vec<usize> = std::iter::once(0)
                .chain(rest.as_slice().iter().map(|&v| v + 1))
                .collect();
            let candidate = Permutation::from_vec_unchecked(values);

            if is_compatible(&candidate) {
                return Ok(CompatibilitySearch::Found {
                    permutation: candidate,
                    attempts,
                });
            }
        }

        // Postcondition
        assert_eq!(attempts, self.attempts_max, "search must spend its budget");
        Ok(CompatibilitySearch::Exhausted { attempts })
    }
}

impl Default for CycleAssigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::ParticipantId;
    use crate::error::AssignError;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    /// Follow `targets[round]` from the first participant and count visits.
    fn cycle_length(roster: &Roster, round: usize) -> usize {
        let start: ParticipantId = roster.participants()[0].id();
        let mut current = start;
        let mut visited = std::collections::HashSet::new();
        while visited.insert(current) {
            current = roster.get(current).unwrap().targets()[round];
        }
        assert_eq!(current, start, "walk must return to start");
        visited.len()
    }

    #[test]
    fn test_is_compatible_examples() {
        let ok = Permutation::try_from_vec(vec![0, 2, 4, 1, 3]).unwrap();
        assert!(is_compatible(&ok));

        let identity = Permutation::identity(5);
        assert!(!is_compatible(&identity));

        let unpinned = Permutation::try_from_vec(vec![2, 0, 4, 1, 3]).unwrap();
        assert!(!is_compatible(&unpinned));

        let reversed = Permutation::try_from_vec(vec![0, 4, 3, 2, 1]).unwrap();
        assert!(!is_compatible(&reversed));
    }

    #[test]
    fn test_no_compatible_permutation_below_five() {
        for n in 1..=4 {
            let mut codec = PermutationCodec::new();
            let total: u32 = (1..=n as u32).product();
            for i in 0..total {
                let p = codec
                    .nth_permutation(&num_bigint::BigUint::from(i), n)
                    .unwrap();
                assert!(!is_compatible(&p), "{p:?} should be incompatible");
            }
        }
    }

    #[test]
    fn test_validate_rounds() {
        assert!(validate(5, 1).is_ok());
        assert!(validate(5, 2).is_ok());
        assert!(matches!(
            validate(5, 0),
            Err(DomainError::RoundsOutOfRange { rounds: 0, .. })
        ));
        assert!(matches!(
            validate(5, 3),
            Err(DomainError::RoundsOutOfRange { rounds: 3, .. })
        ));
    }

    #[test]
    fn test_validate_participants() {
        assert_eq!(
            validate(1, 1),
            Err(DomainError::InsufficientParticipants {
                count: 1,
                required: 2
            })
        );
        assert_eq!(
            validate(2, 2),
            Err(DomainError::InsufficientParticipants {
                count: 2,
                required: 3
            })
        );
        assert!(validate(2, 1).is_ok());
    }

    #[test]
    fn test_round_one_single_cycle() {
        for n in 2..=12 {
            let mut roster = Roster::from_names(names(n)).unwrap();
            let mut rng = RandomStream::from_seed(&format!("cycle-{n}"));
            CycleAssigner::new().assign(&mut roster, 1, &mut rng).unwrap();

            for p in roster.participants() {
                assert_eq!(p.targets().len(), 1);
                assert_ne!(p.targets()[0], p.id());
            }
            assert_eq!(cycle_length(&roster, 0), n);
        }
    }

    #[test]
    fn test_round_two_constraints() {
        for n in 5..=15 {
            let mut roster = Roster::from_names(names(n)).unwrap();
            let mut rng = RandomStream::from_seed(&format!("two-{n}"));
            CycleAssigner::new().assign(&mut roster, 2, &mut rng).unwrap();

            assert_eq!(cycle_length(&roster, 0), n);
            assert_eq!(cycle_length(&roster, 1), n);
            for p in roster.participants() {
                let first = p.targets()[0];
                let second = p.targets()[1];
                assert_ne!(first, second);
                assert_ne!(second, p.id());
                assert_ne!(roster.get(second).unwrap().targets()[0], p.id());
                assert_ne!(roster.get(first).unwrap().targets()[1], p.id());
            }
        }
    }

    #[test]
    fn test_exhaustion_commits_nothing() {
        for n in [3, 4] {
            let mut roster = Roster::from_names(names(n)).unwrap();
            let mut rng = RandomStream::from_seed("any");
            let err = CycleAssigner::new()
                .with_attempts_max(25)
                .assign(&mut roster, 2, &mut rng)
                .unwrap_err();

            assert_eq!(
                err,
                AssignError::Assignment(AssignmentError::NoCompatiblePermutation { attempts: 25 })
            );
            assert!(roster.participants().iter().all(|p| p.targets().is_empty()));
        }
    }

    #[test]
    fn test_search_reports_attempts() {
        let mut assigner = CycleAssigner::new();
        let mut rng = RandomStream::from_seed("search");
        match assigner.search_compatible(8, &mut rng).unwrap() {
            CompatibilitySearch::Found {
                permutation,
                attempts,
            } => {
                assert!(is_compatible(&permutation));
                assert!(attempts >= 1 && attempts <= assigner.attempts_max());
            }
            CompatibilitySearch::Exhausted { .. } => panic!("8 participants should succeed"),
        }
    }

    #[test]
    fn test_search_exhausts_exact_budget() {
        let mut assigner = CycleAssigner::new();
        let mut rng = RandomStream::from_seed("search");
        let outcome = assigner.search_compatible(4, &mut rng).unwrap();
        assert_eq!(
            outcome,
            CompatibilitySearch::Exhausted {
                attempts: ASSIGNMENT_ATTEMPTS_COUNT_MAX
            }
        );
        // 1000 draws of a 3-element arrangement, rejected chunks included
        assert_eq!(rng.draws(), 1304);
    }

    #[test]
    fn test_search_stops_at_custom_budget() {
        let mut assigner = CycleAssigner::new().with_attempts_max(7);
        let mut rng = RandomStream::from_seed("search");
        let outcome = assigner.search_compatible(4, &mut rng).unwrap();
        assert_eq!(outcome, CompatibilitySearch::Exhausted { attempts: 7 });
        assert_eq!(rng.draws(), 9);
    }
}
