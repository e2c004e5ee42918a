//! Lookup from a calendar day to the solver that answers it

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::{InputKind, Solver};

/// One puzzle slot of the Advent of Code calendar
///
/// Only years `FIRST_YEAR..FIRST_YEAR + YEARS` and days `1..=DAYS` exist;
/// every slot maps to a unique index into a flat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDay {
    pub year: u16,
    pub day: u8,
}

impl PuzzleDay {
    /// The first Advent of Code event
    pub const FIRST_YEAR: u16 = 2015;
    pub const YEARS: usize = 20;
    pub const DAYS: u8 = 25;
    /// Number of slots in the calendar
    pub const SLOTS: usize = Self::YEARS * Self::DAYS as usize;

    /// The slot for `year`/`day`, or `None` outside the calendar
    pub fn new(year: u16, day: u8) -> Option<Self> {
        let years = Self::FIRST_YEAR..Self::FIRST_YEAR + Self::YEARS as u16;
        (years.contains(&year) && (1..=Self::DAYS).contains(&day)).then_some(Self { year, day })
    }

    fn slot(self) -> usize {
        (self.year - Self::FIRST_YEAR) as usize * Self::DAYS as usize + (self.day - 1) as usize
    }

    fn from_slot(slot: usize) -> Self {
        Self {
            year: Self::FIRST_YEAR + (slot / Self::DAYS as usize) as u16,
            day: (slot % Self::DAYS as usize) as u8 + 1,
        }
    }
}

/// Parses an input of the given kind into a ready solver
pub type SolverFactory = Box<
    dyn for<'a> Fn(&'a str, InputKind) -> Result<Box<dyn DynSolver + 'a>, ParseError>
        + Send
        + Sync,
>;

/// What the registry knows about one registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver answers
    pub parts: u8,
    /// Tags from the plugin declaration; empty for direct registrations
    pub tags: &'static [&'static str],
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

impl Entry {
    fn info(&self, at: PuzzleDay) -> FactoryInfo {
        FactoryInfo {
            year: at.year,
            day: at.day,
            parts: self.parts,
            tags: self.tags,
        }
    }
}

/// Collects solvers into a [`SolverRegistry`]
///
/// Each calendar slot takes at most one solver; registering outside the
/// calendar or twice for the same day is an error.
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..PuzzleDay::SLOTS).map(|_| None).collect(),
        }
    }

    fn insert<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str, InputKind) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let at = PuzzleDay::new(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let slot = &mut self.entries[at.slot()];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *slot = Some(Entry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register a hand-written factory answering `parts` parts
    pub fn register_factory<F>(
        self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str, InputKind) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(year, day, parts, &[], factory)
    }

    /// Register a [`Solver`] type for `year`/`day`
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_tagged::<S>(year, day, &[])
    }

    fn register_tagged<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.insert(year, day, S::PARTS, tags, move |input: &str, kind| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, kind, input)?))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins matching `filter`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// // Only the Intcode days
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"intcode"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>().filter(|plugin| filter(plugin)) {
            self = plugin.solver.register_with(self, plugin)?;
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable table of solvers, one slot per calendar day
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Every registered solver, in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(slot, entry)| {
            entry.as_ref().map(|e| e.info(PuzzleDay::from_slot(slot)))
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let at = PuzzleDay::new(year, day)?;
        self.entries[at.slot()].as_ref().map(|e| e.info(at))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver for `year`/`day`
    ///
    /// Fails when the day is outside the calendar, has no solver, or the
    /// solver rejects the input.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
        kind: InputKind,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let at = PuzzleDay::new(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[at.slot()]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        Ok((entry.factory)(input, kind)?)
    }
}

/// Object-safe hook that lets a solver register itself from a plugin
///
/// Every [`Solver`] gets this through a blanket impl, which is what makes
/// `&'static dyn RegisterableSolver` usable in [`SolverPlugin`].
pub trait RegisterableSolver: Sync {
    /// Register this solver type under the plugin's day and tags
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_tagged::<S>(plugin.year, plugin.day, plugin.tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration
///
/// Normally emitted by `#[derive(AutoRegisterSolver)]`:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2019,
///         day: 9,
///         solver: &Day9Solver,
///         tags: &["intcode"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used to filter plugins (e.g. "intcode", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_cover_the_calendar() {
        for slot in 0..PuzzleDay::SLOTS {
            let at = PuzzleDay::from_slot(slot);
            assert_eq!(PuzzleDay::new(at.year, at.day), Some(at));
            assert_eq!(at.slot(), slot);
        }
        assert_eq!(PuzzleDay::from_slot(0), PuzzleDay { year: 2015, day: 1 });
    }

    #[test]
    fn test_outside_the_calendar() {
        assert_eq!(PuzzleDay::new(2014, 1), None);
        assert_eq!(PuzzleDay::new(2035, 1), None);
        assert_eq!(PuzzleDay::new(2019, 0), None);
        assert_eq!(PuzzleDay::new(2019, 26), None);
        assert!(PuzzleDay::new(2034, 25).is_some());
    }

    #[test]
    fn test_direct_registration_has_no_tags() {
        let registry = SolverRegistryBuilder::new()
            .register_factory(2016, 3, 1, |_, _| {
                Err(ParseError::InvalidFormat("unused".into()))
            })
            .unwrap()
            .build();
        let info = registry.get_info(2016, 3).unwrap();
        assert_eq!((info.parts, info.tags), (1, &[][..]));
        assert_eq!(registry.iter_info().collect::<Vec<_>>(), vec![info]);
    }
}
