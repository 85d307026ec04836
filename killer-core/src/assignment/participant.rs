//! Participant - Named Entries and Their Targets
//!
//! TigerStyle: Participants are addressed by handle, never by name, once
//! the roster exists.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::constants::PARTICIPANTS_COUNT_MAX;
use crate::error::{DomainError, DomainResult};
use crate::permutation::Permutation;
use crate::random::RandomStream;

// =============================================================================
// ParticipantId
// =============================================================================

/// Opaque handle of a participant within its roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(usize);

impl ParticipantId {
    /// Position of the participant in the roster's input order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One named entry receiving targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    targets: Vec<ParticipantId>,
}

impl Participant {
    /// Handle of this participant.
    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Caller-facing name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Targets in round order: `targets()[r]` is the round `r + 1` target.
    #[must_use]
    pub fn targets(&self) -> &[ParticipantId] {
        &self.targets
    }
}

// =============================================================================
// Roster
// =============================================================================

/// The participants of one generate action, in input order.
///
/// TigerStyle:
/// - Names are trimmed, unique and non-empty
/// - Targets only grow through whole-cycle commits, one per round
/// - Display order is reshuffled on every reveal, stored order never is
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Build a roster from validated names.
    ///
    /// Surrounding whitespace is dropped before the empty and duplicate
    /// checks, so `" Ann"` and `"Ann"` are the same participant.
    ///
    /// # Errors
    /// Returns error if a name is empty, a name repeats, or there are too
    /// many names.
    pub fn from_names<I, S>(names: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut participants = Vec::new();

        for (position, name) in names.into_iter().enumerate() {
            let name: String = name.into();
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(DomainError::EmptyName { position });
            }
            if !seen.insert(name.clone()) {
                return Err(DomainError::DuplicateName { name });
            }
            if participants.len() == PARTICIPANTS_COUNT_MAX {
                return Err(DomainError::TooManyParticipants {
                    count: position + 1,
                    max: PARTICIPANTS_COUNT_MAX,
                });
            }
            participants.push(Participant {
                id: ParticipantId(position),
                name,
                targets: Vec::new(),
            });
        }

        Ok(Self { participants })
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in input order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Look up a participant by handle.
    ///
    /// # Errors
    /// Returns error if the handle is not part of this roster.
    pub fn get(&self, id: ParticipantId) -> DomainResult<&Participant> {
        self.participants
            .get(id.0)
            .ok_or(DomainError::UnknownParticipant { id: id.0 })
    }

    /// Look up a participant by name, ignoring surrounding whitespace.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Participant> {
        let name = name.trim();
        self.participants.iter().find(|p| p.name == name)
    }

    /// Name of a participant.
    ///
    /// # Errors
    /// Returns error if the handle is not part of this roster.
    pub fn name_of(&self, id: ParticipantId) -> DomainResult<&str> {
        self.get(id).map(Participant::name)
    }

    /// Append one round: each position of `cycle` targets the next one.
    ///
    /// `cycle` lists participant indices in cycle order.
    pub(crate) fn commit_cycle(&mut self, cycle: &Permutation) {
        // Precondition
        assert_eq!(cycle.len(), self.len(), "cycle must cover the roster");

        for (position, &index) in cycle.as_slice().iter().enumerate() {
            let target = ParticipantId(cycle.cyclic_next(position));
            debug_assert_ne!(index, target.0, "participant must not target itself");
            self.participants[index].targets.push(target);
        }
    }

    /// A participant's targets in a freshly shuffled display order.
    ///
    /// The committed round order is left as it is.
    ///
    /// # Errors
    /// Returns error if the handle is not part of this roster.
    pub fn shuffled_targets(
        &self,
        id: ParticipantId,
        rng: &mut RandomStream,
    ) -> DomainResult<Vec<ParticipantId>> {
        let mut targets = self.get(id)?.targets.clone();
        rng.shuffle(&mut targets);
        Ok(targets)
    }
}
