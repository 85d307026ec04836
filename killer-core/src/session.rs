//! Session - Generate and Reveal
//!
//! TigerStyle: The seed outlives assignments; the random stream does not.
//!
//! # Lifecycle
//!
//! A [`Session`] keeps the seed across generate actions. Every
//! [`Session::generate`] builds a fresh roster, reseeds a fresh
//! [`RandomStream`] from the session seed and hands both back inside an
//! [`Assignment`]. Revealing targets continues that same stream, so the
//! display order is reproducible from the seed as well.

use serde::Serialize;
use tracing::{debug, info};

use crate::assignment::{CycleAssigner, Participant, ParticipantId, Roster};
use crate::config::SessionConfig;
use crate::error::{AssignResult, DomainError, DomainResult};
use crate::random::RandomStream;

/// Result of one generate action.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    used_seed: String,
    rounds: usize,
    participants: Roster,
    #[serde(skip)]
    rng: RandomStream,
}

impl Assignment {
    /// The seed that produced this assignment.
    #[must_use]
    pub fn used_seed(&self) -> &str {
        &self.used_seed
    }

    /// Targets per participant.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The roster with committed targets.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.participants
    }

    /// Participants in input order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        self.participants.participants()
    }

    /// A participant's target names in a freshly shuffled order.
    ///
    /// Each call draws from the assignment's stream, so repeated reveals may
    /// show a different order, but the same sequence of reveals always
    /// shows the same orders for the same seed. The stored round order of
    /// [`Participant::targets`] is never changed.
    ///
    /// # Errors
    /// Returns error if the handle is not part of this assignment.
    pub fn reveal(&mut self, id: ParticipantId) -> DomainResult<Vec<String>> {
        let targets = self.participants.shuffled_targets(id, &mut self.rng)?;
        targets
            .into_iter()
            .map(|target| self.participants.name_of(target).map(str::to_owned))
            .collect()
    }

    /// Same as [`Assignment::reveal`], addressed by name.
    ///
    /// # Errors
    /// Returns error if no participant has this name.
    pub fn reveal_by_name(&mut self, name: &str) -> DomainResult<Vec<String>> {
        let id = self
            .participants
            .find(name)
            .map(Participant::id)
            .ok_or_else(|| DomainError::UnknownName {
                name: name.to_owned(),
            })?;
        self.reveal(id)
    }

    /// Reveal every participant in input order as `(name, targets)` pairs.
    ///
    /// # Errors
    /// Returns error if a stored target does not belong to the roster.
    pub fn reveal_all(&mut self) -> DomainResult<Vec<(String, Vec<String>)>> {
        let ids: Vec<ParticipantId> = self.participants().iter().map(Participant::id).collect();
        ids.into_iter()
            .map(|id| {
                let name = self.participants.name_of(id)?.to_owned();
                let targets = self.reveal(id)?;
                Ok((name, targets))
            })
            .collect()
    }
}

/// Caller-facing entry point: holds the seed and the assigner.
///
/// # Example
///
/// ```rust
/// use killer_core::config::SessionConfig;
/// use killer_core::session::Session;
///
/// let mut session = Session::new(SessionConfig::new().with_seed("test"));
/// let mut assignment = session.generate(&["A", "B", "C", "D"], 1).unwrap();
///
/// assert_eq!(assignment.used_seed(), "test");
/// assert_eq!(assignment.reveal_by_name("A").unwrap(), vec!["D"]);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    assigner: CycleAssigner,
}

impl Session {
    /// Create a session from a configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let assigner = CycleAssigner::new()
            .with_attempts_max(config.attempts_max())
            .with_decent_fraction(config.decent_fraction());
        Self { config, assigner }
    }

    /// The current fixed seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.config.seed()
    }

    /// Replace the seed. `None` or empty derives a fresh seed per generate.
    ///
    /// # Errors
    /// Returns error if the seed is too long.
    pub fn set_seed(&mut self, seed: Option<String>) -> DomainResult<()> {
        self.config = self.config.clone().try_with_seed(seed)?;
        debug!(seed = ?self.config.seed(), "session seed changed");
        Ok(())
    }

    /// Assign `rounds` targets to each name.
    ///
    /// # Errors
    /// Returns a domain error for invalid names or counts, and an assignment
    /// error when no compatible second round was found.
    #[tracing::instrument(skip(self, names), fields(participants = names.len()))]
    pub fn generate<S: AsRef<str>>(
        &mut self,
        names: &[S],
        rounds: usize,
    ) -> AssignResult<Assignment> {
        let mut roster = Roster::from_names(names.iter().map(|name| name.as_ref().to_owned()))?;
        let mut rng = RandomStream::new(self.config.seed());

        self.assigner.assign(&mut roster, rounds, &mut rng)?;
        info!(seed = rng.used_seed(), "assignment generated");

        Ok(Assignment {
            used_seed: rng.used_seed().to_owned(),
            rounds,
            participants: roster,
            rng,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
