// SPDX-License-Identifier: MPL-2.0
//! Section navigation module for the portfolio presentation.
//!
//! This module provides the shared `SectionNavigator` that the application
//! update loop and the navigation menu both read, keeping a single source of
//! truth for which section panel is visible, which sub-item inside it is
//! active, and which animation variant the next transition should use.

use std::fmt;

/// Vertical direction of the most recent section transition.
///
/// The direction only selects an animation variant; it carries no other
/// meaning. The initial direction is [`Direction::Down`] so the very first
/// panel enters from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Static description of one top-level section panel.
///
/// The descriptor table is fixed at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Display title shown in the navigation menu. Titles may repeat when
    /// several panels are grouped under one visible label.
    pub title: String,
    /// Number of sub-items the panel cycles through. A panel without
    /// sub-items counts as one, so the sub-item invariant stays meaningful.
    pub subsection_count: usize,
}

impl SectionDescriptor {
    /// Creates a descriptor, normalizing `subsection_count` to at least one.
    #[must_use]
    pub fn new(title: impl Into<String>, subsection_count: usize) -> Self {
        Self {
            title: title.into(),
            subsection_count: subsection_count.max(1),
        }
    }
}

/// One clickable entry of the navigation menu: a display title paired with
/// the index of the first section carrying that title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub index: usize,
}

/// Read-only view of the navigator state, handed to rendering code each
/// frame so views never hold a mutable borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSnapshot {
    pub section_index: usize,
    pub subsection_index: usize,
    pub direction: Direction,
    pub transitioning: bool,
}

/// Proof that a section transition started, carrying the generation the
/// deferred flag reset must present to [`SectionNavigator::end_transition`].
///
/// Keying the reset by generation means a timer scheduled for an earlier
/// transition can never clear the flag of a transition that superseded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    generation: u64,
}

impl TransitionTicket {
    /// Returns the generation this ticket was issued for.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Tracks the visible section, the active sub-item, the last transition
/// direction, and whether a transition is currently in flight.
///
/// All mutation happens synchronously inside the application update loop;
/// the only time-based behavior is the transition flag reset, which the
/// caller schedules and completes through [`TransitionTicket`]s.
///
/// Out-of-range requests are clamped to the nearest valid bound rather than
/// rejected, so the published state always satisfies
/// `section_index < section_count` and
/// `subsection_index < subsection_count_for(section_index)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    sections: Vec<SectionDescriptor>,
    section_index: usize,
    subsection_index: usize,
    direction: Direction,
    transitioning: bool,
    generation: u64,
}

impl SectionNavigator {
    /// Creates a navigator over the given descriptor table, starting at the
    /// first section's first sub-item.
    ///
    /// The table is expected to be non-empty; with an empty table every
    /// operation is a no-op and both indices stay at zero.
    #[must_use]
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        Self {
            sections,
            section_index: 0,
            subsection_index: 0,
            direction: Direction::default(),
            transitioning: false,
            generation: 0,
        }
    }

    /// Returns the descriptor table.
    #[must_use]
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the index of the currently visible section.
    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    /// Returns the index of the active sub-item within the visible section.
    #[must_use]
    pub fn subsection_index(&self) -> usize {
        self.subsection_index
    }

    /// Returns the direction of the most recent transition.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true while a section transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Returns the number of sub-items the given section declares, or zero
    /// for an out-of-range index.
    #[must_use]
    pub fn subsection_count_for(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map_or(0, |s| s.subsection_count)
    }

    /// Returns a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            section_index: self.section_index,
            subsection_index: self.subsection_index,
            direction: self.direction,
            transitioning: self.transitioning,
        }
    }

    /// Switches to the section at `target`, clamped to the valid range.
    ///
    /// Selecting the already-visible section is a complete no-op: the
    /// direction keeps its previous value and no transition is started, so
    /// the animation does not retrigger. Otherwise the direction is derived
    /// from the index delta (larger index enters downwards), the sub-item
    /// resets to the section's first entry, and the transition flag is
    /// raised until the returned ticket is redeemed via
    /// [`end_transition`](Self::end_transition).
    pub fn select_section(&mut self, target: usize) -> Option<TransitionTicket> {
        if self.sections.is_empty() {
            return None;
        }

        let target = target.min(self.sections.len() - 1);
        if target == self.section_index {
            return None;
        }

        self.direction = if target > self.section_index {
            Direction::Down
        } else {
            Direction::Up
        };
        self.section_index = target;
        self.subsection_index = 0;
        self.transitioning = true;
        self.generation += 1;

        Some(TransitionTicket {
            generation: self.generation,
        })
    }

    /// Moves `delta` sections forward or backward, saturating at the table
    /// edges. Used by keyboard navigation.
    pub fn step_section(&mut self, delta: i32) -> Option<TransitionTicket> {
        if self.sections.is_empty() {
            return None;
        }

        let target = self.section_index.saturating_add_signed(delta as isize);
        self.select_section(target)
    }

    /// Switches the active sub-item of the visible section, clamped to the
    /// section's declared range.
    ///
    /// Sub-item changes are lighter-weight than section changes: they never
    /// touch the section index, the direction, or the transition flag.
    pub fn select_subsection(&mut self, target: usize) {
        let count = self.subsection_count_for(self.section_index);
        if count == 0 {
            return;
        }
        self.subsection_index = target.min(count - 1);
    }

    /// Completes the transition whose ticket carried this generation.
    ///
    /// A generation from a superseded transition is ignored, which is what
    /// keeps a stale timer from clearing the flag of a newer transition.
    pub fn end_transition(&mut self, generation: u64) {
        if generation == self.generation {
            self.transitioning = false;
        }
    }
}

/// Collapses sections sharing a display title into single menu entries.
///
/// Iterates the descriptor table once and emits `(title, index)` the first
/// time each title is seen, preserving the original order. Clicking a
/// collapsed entry therefore resolves to the first section carrying that
/// label. The result only depends on the input, so re-running on the same
/// table yields the same entries.
#[must_use]
pub fn unique_title_entries(sections: &[SectionDescriptor]) -> Vec<NavEntry> {
    let mut seen = std::collections::HashSet::new();
    let mut entries = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if seen.insert(section.title.as_str()) {
            entries.push(NavEntry {
                title: section.title.clone(),
                index,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("Home", 1),
            SectionDescriptor::new("Works", 3),
            SectionDescriptor::new("Works", 1),
            SectionDescriptor::new("Contact", 1),
        ]
    }

    fn navigator() -> SectionNavigator {
        SectionNavigator::new(sample_sections())
    }

    #[test]
    fn new_navigator_starts_at_first_section() {
        let nav = navigator();
        assert_eq!(nav.section_index(), 0);
        assert_eq!(nav.subsection_index(), 0);
        assert_eq!(nav.direction(), Direction::Down);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn select_forward_derives_down_direction() {
        let mut nav = navigator();
        nav.select_section(1);
        let ticket = nav.select_section(3);
        assert!(ticket.is_some());
        assert_eq!(nav.section_index(), 3);
        assert_eq!(nav.direction(), Direction::Down);
    }

    #[test]
    fn select_backward_derives_up_direction() {
        let mut nav = navigator();
        nav.select_section(2);
        nav.select_section(0);
        assert_eq!(nav.section_index(), 0);
        assert_eq!(nav.direction(), Direction::Up);
    }

    #[test]
    fn selecting_current_section_is_a_noop() {
        let mut nav = navigator();
        nav.select_section(2);
        assert_eq!(nav.direction(), Direction::Down);

        nav.select_section(0); // direction is now Up
        let ticket = nav.select_section(0);
        assert!(ticket.is_none());
        assert_eq!(nav.direction(), Direction::Up); // unchanged
        assert_eq!(nav.section_index(), 0);
    }

    #[test]
    fn out_of_range_section_clamps_to_last() {
        let mut nav = navigator();
        nav.select_section(usize::MAX);
        assert_eq!(nav.section_index(), 3);
        assert_eq!(nav.direction(), Direction::Down);
    }

    #[test]
    fn section_change_resets_subsection() {
        let mut nav = navigator();
        nav.select_section(1);
        nav.select_subsection(2);
        assert_eq!(nav.subsection_index(), 2);

        nav.select_section(2);
        assert_eq!(nav.subsection_index(), 0);
    }

    #[test]
    fn subsection_change_leaves_section_and_direction_alone() {
        let mut nav = navigator();
        nav.select_section(1);
        let ticket = nav.select_section(1); // settle direction as Down, no-op
        assert!(ticket.is_none());

        let before = nav.direction();
        nav.select_subsection(2);
        assert_eq!(nav.section_index(), 1);
        assert_eq!(nav.direction(), before);
        assert_eq!(nav.subsection_index(), 2);
    }

    #[test]
    fn subsection_change_never_raises_transition_flag() {
        let mut nav = navigator();
        let ticket = nav.select_section(1).expect("transition should start");
        nav.end_transition(ticket.generation());
        assert!(!nav.is_transitioning());

        nav.select_subsection(1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn out_of_range_subsection_clamps_to_last() {
        let mut nav = navigator();
        nav.select_section(1); // 3 sub-items
        nav.select_subsection(usize::MAX);
        assert_eq!(nav.subsection_index(), 2);
    }

    #[test]
    fn transition_flag_lifecycle() {
        let mut nav = navigator();
        let ticket = nav.select_section(2).expect("transition should start");
        assert!(nav.is_transitioning());

        nav.end_transition(ticket.generation());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_transition() {
        let mut nav = navigator();
        let first = nav.select_section(1).expect("first transition");
        let second = nav.select_section(2).expect("second transition");

        // The first timer fires after the second transition began.
        nav.end_transition(first.generation());
        assert!(nav.is_transitioning());

        nav.end_transition(second.generation());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn step_section_saturates_at_edges() {
        let mut nav = navigator();
        assert!(nav.step_section(-3).is_none());
        assert_eq!(nav.section_index(), 0);

        nav.step_section(100);
        assert_eq!(nav.section_index(), 3);

        nav.step_section(-1);
        assert_eq!(nav.section_index(), 2);
        assert_eq!(nav.direction(), Direction::Up);
    }

    #[test]
    fn bounds_hold_under_arbitrary_call_sequences() {
        let mut nav = navigator();
        let inputs = [0usize, 7, usize::MAX, 2, 2, 5, 1, 0, usize::MAX - 1];

        for (i, &input) in inputs.iter().enumerate() {
            if i % 2 == 0 {
                nav.select_section(input);
            } else {
                nav.select_subsection(input);
            }
            assert!(nav.section_index() < nav.section_count());
            assert!(nav.subsection_index() < nav.subsection_count_for(nav.section_index()));
        }
    }

    #[test]
    fn empty_table_stays_inert() {
        let mut nav = SectionNavigator::new(Vec::new());
        assert!(nav.select_section(3).is_none());
        assert!(nav.step_section(1).is_none());
        nav.select_subsection(5);
        assert_eq!(nav.section_index(), 0);
        assert_eq!(nav.subsection_index(), 0);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn descriptor_normalizes_zero_subsections_to_one() {
        let descriptor = SectionDescriptor::new("Home", 0);
        assert_eq!(descriptor.subsection_count, 1);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut nav = navigator();
        nav.select_section(1);
        nav.select_subsection(2);

        let snapshot = nav.snapshot();
        assert_eq!(snapshot.section_index, 1);
        assert_eq!(snapshot.subsection_index, 2);
        assert_eq!(snapshot.direction, Direction::Down);
        assert!(snapshot.transitioning);
    }

    #[test]
    fn unique_titles_keep_first_occurrence() {
        let entries = unique_title_entries(&sample_sections());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], NavEntry { title: "Home".into(), index: 0 });
        assert_eq!(entries[1], NavEntry { title: "Works".into(), index: 1 });
        assert_eq!(entries[2], NavEntry { title: "Contact".into(), index: 3 });
    }

    #[test]
    fn unique_titles_are_idempotent() {
        let sections = sample_sections();
        let first = unique_title_entries(&sections);
        let second = unique_title_entries(&sections);
        assert_eq!(first, second);
    }

    #[test]
    fn unique_titles_on_empty_table() {
        assert!(unique_title_entries(&[]).is_empty());
    }
}
