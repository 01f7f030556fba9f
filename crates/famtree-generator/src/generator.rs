//! The recursive ancestry generator.
//!
//! Fabrication is depth-first from the root. Each person's years come from
//! a [`ConstraintNode`] derived from its child's node, so ranges tighten
//! as the recursion climbs. Everything is fabricated in memory into a
//! [`GenerationLedger`] and written to the sink in three bulk operations
//! only once the whole tree exists.

use famtree_ledger::census::{expected_events, expected_persons, verify_census};
use famtree_ledger::{CensusResult, GenerationLedger, GenerationResult};
use famtree_store::PersistenceSink;
use famtree_types::{Event, EventId, EventType, Gender, Person, PersonId, RootIdentity};
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::constraints::ConstraintNode;
use crate::content::ContentProvider;
use crate::error::{ConstraintError, GenerationError};

/// Fabricates and persists ancestry trees.
pub struct TreeGenerator<'a, C, S> {
    config: &'a GeneratorConfig,
    content: &'a C,
    sink: &'a mut S,
}

impl<'a, C: ContentProvider, S: PersistenceSink> TreeGenerator<'a, C, S> {
    /// Create a generator writing to `sink`.
    pub const fn new(config: &'a GeneratorConfig, content: &'a C, sink: &'a mut S) -> Self {
        Self {
            config,
            content,
            sink,
        }
    }

    /// Generate and persist a tree, reporting only the outcome.
    ///
    /// Any failure is logged and reported as an unsuccessful result with
    /// zero counts.
    pub fn generate<R: Rng>(
        &mut self,
        identity: &RootIdentity,
        generations: Option<i64>,
        rng: &mut R,
    ) -> GenerationResult {
        match self.try_generate(identity, generations, rng) {
            Ok(ledger) => ledger.result(),
            Err(err) => {
                tracing::error!(
                    username = %identity.username,
                    error = %err,
                    "Tree generation failed"
                );
                GenerationResult::failed()
            }
        }
    }

    /// Generate and persist a tree, returning the full ledger.
    ///
    /// Persons are written first, then events, then the root user is
    /// linked to the root person. A rejected write stops the generation;
    /// later writes are not attempted and earlier ones are not undone.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the generation count is too large,
    /// a year range cannot be honored, the tree fails its census, or the
    /// sink rejects a write.
    pub fn try_generate<R: Rng>(
        &mut self,
        identity: &RootIdentity,
        generations: Option<i64>,
        rng: &mut R,
    ) -> Result<GenerationLedger, GenerationError> {
        let generations = self.resolve_generations(generations)?;
        let (root_id, mut ledger) = self.fabricate_tree(identity, generations, rng)?;

        if let CensusResult::Mismatch(mismatch) = verify_census(&ledger, generations) {
            return Err(mismatch.into());
        }

        self.sink.create_persons(ledger.persons())?;
        tracing::debug!(count = ledger.person_count(), "Persons written");

        self.sink.create_events(ledger.events())?;
        tracing::debug!(count = ledger.event_count(), "Events written");

        self.sink.update_user_person(&identity.username, root_id)?;
        ledger.mark_success();

        tracing::info!(
            username = %identity.username,
            generations,
            persons = ledger.person_count(),
            events = ledger.event_count(),
            "Tree generated"
        );
        Ok(ledger)
    }

    /// Fabricate a tree without writing anything.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the generation count is too large
    /// or a year range cannot be honored.
    pub fn fabricate<R: Rng>(
        &self,
        identity: &RootIdentity,
        generations: Option<i64>,
        rng: &mut R,
    ) -> Result<GenerationLedger, GenerationError> {
        let generations = self.resolve_generations(generations)?;
        let (_, ledger) = self.fabricate_tree(identity, generations, rng)?;
        Ok(ledger)
    }

    /// Turn a requested generation count into a checked layer count.
    ///
    /// `None` and negative counts mean the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::TooManyGenerations`] above the
    /// configured maximum, which is itself capped at
    /// [`GENERATION_LIMIT`](crate::config::GENERATION_LIMIT).
    pub fn resolve_generations(&self, requested: Option<i64>) -> Result<u32, GenerationError> {
        let generations = match requested {
            Some(count) if count >= 0 => u32::try_from(count).unwrap_or(u32::MAX),
            _ => self.config.default_generations,
        };
        let max = self.config.effective_max_generations();
        if generations > max {
            return Err(GenerationError::TooManyGenerations {
                requested: generations,
                max,
            });
        }
        Ok(generations)
    }

    fn fabricate_tree<R: Rng>(
        &self,
        identity: &RootIdentity,
        generations: u32,
        rng: &mut R,
    ) -> Result<(PersonId, GenerationLedger), GenerationError> {
        let node = ConstraintNode::root(generations, &self.config.root_birth_years, rng)?;
        let root = Person::new(
            random_person_id(rng),
            identity.username.clone(),
            identity.first_name.clone(),
            identity.last_name.clone(),
            identity.gender,
        );
        let root_id = root.person_id;

        let mut fabricator = Fabricator {
            content: self.content,
            rng,
            ledger: ledger_for(generations),
        };
        fabricator.fill(root, &node)?;

        tracing::debug!(
            username = %identity.username,
            generations,
            persons = fabricator.ledger.person_count(),
            events = fabricator.ledger.event_count(),
            "Tree fabricated"
        );
        Ok((root_id, fabricator.ledger))
    }
}

/// State of one in-progress fabrication.
struct Fabricator<'c, C, R> {
    content: &'c C,
    rng: &'c mut R,
    ledger: GenerationLedger,
}

impl<C: ContentProvider, R: Rng> Fabricator<'_, C, R> {
    /// Record `person`'s events, then its ancestors, then the person.
    fn fill(&mut self, mut person: Person, node: &ConstraintNode<'_>) -> Result<(), GenerationError> {
        self.record_event(&person, EventType::Birth, node.birth_year());
        if !node.is_root() {
            let death_year = node.death_year().ok_or_else(|| ConstraintError::YearOutOfRange {
                event: EventType::Death,
                context: String::from("ancestor has no death year"),
            })?;
            self.record_event(&person, EventType::Death, death_year);
        }

        if !node.has_parents() {
            self.ledger.record_person(person);
            return Ok(());
        }

        let mother_node = ConstraintNode::parent_of(node, self.rng)?;
        let father_node = ConstraintNode::parent_of(node, self.rng)?;
        tracing::trace!(
            depth = node.depth(),
            remaining = node.generations_remaining(),
            "Fabricating parents"
        );

        let mut mother = Person::new(
            random_person_id(self.rng),
            person.associated_username.clone(),
            self.content.random_first_name(self.rng),
            self.content.random_last_name(self.rng),
            Gender::Female,
        );
        let mut father = Person::new(
            random_person_id(self.rng),
            person.associated_username.clone(),
            self.content.random_first_name(self.rng),
            person.last_name.clone(),
            Gender::Male,
        );
        mother.spouse_id = Some(father.person_id);
        father.spouse_id = Some(mother.person_id);
        person.mother_id = Some(mother.person_id);
        person.father_id = Some(father.person_id);
        self.ledger.record_person(person);

        self.fill(mother.clone(), &mother_node)?;
        self.fill(father.clone(), &father_node)?;

        let year = mother_node.marriage_range_with(&father_node)?.sample(self.rng);
        let location = self.content.random_location(self.rng);
        for spouse in [&mother, &father] {
            let event_id = random_event_id(self.rng);
            self.ledger
                .record_event(Event::new(event_id, spouse, EventType::Marriage, year, &location));
        }
        Ok(())
    }

    fn record_event(&mut self, owner: &Person, event_type: EventType, year: u32) {
        let location = self.content.random_location(self.rng);
        let event_id = random_event_id(self.rng);
        self.ledger
            .record_event(Event::new(event_id, owner, event_type, year, &location));
    }
}

fn ledger_for(generations: u32) -> GenerationLedger {
    let persons = expected_persons(generations).unwrap_or(0);
    GenerationLedger::with_capacity(persons, expected_events(persons).unwrap_or(0))
}

fn random_person_id<R: Rng>(rng: &mut R) -> PersonId {
    PersonId::from_random_bytes(rng.random())
}

fn random_event_id<R: Rng>(rng: &mut R) -> EventId {
    EventId::from_random_bytes(rng.random())
}
