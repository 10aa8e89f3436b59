//! Lane allocation for calendar cards.
//!
//! Packs the visible cards of a day range into horizontal lanes so that no
//! two cards sharing a lane overlap in columns, while keeping a card on the
//! lane it occupied in earlier passes whenever that lane is still free. The
//! memory of past placements lives in the allocator instance; one allocator
//! belongs to exactly one calendar view and is dropped with it.
//!
//! Placement order:
//! - cards that started before the visible window ("continuing") go first,
//!   ordered by their remembered lane so they land where the viewer already
//!   saw them,
//! - then cards starting inside the window, earliest start first, longer
//!   duration winning ties so long bars sink to the low lanes.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::event::CalendarCard;

/// Placement of one card in the lane grid.
///
/// Columns are zero-based inclusive indices into the day range. `open_start`
/// and `open_end` report that the card's true date range extends past the
/// corresponding window edge (the rendered bar gets a flat edge there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub card_id: String,
    pub lane: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub open_start: bool,
    pub open_end: bool,
}

impl LaneAssignment {
    /// Closed-interval column overlap with another assignment.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_col <= other.end_col && self.end_col >= other.start_col
    }
}

/// Number of lanes an assignment set occupies (highest lane index + 1).
///
/// Lanes may be sparse when remembered placements are honored, so this can
/// exceed the number of distinct lanes in use.
pub fn lane_count(assignments: &[LaneAssignment]) -> usize {
    assignments.iter().map(|a| a.lane + 1).max().unwrap_or(0)
}

/// Greedy, stability-preserving lane allocator.
///
/// Owns the lane memory: a map from card id to the lane the card was last
/// placed on. The memory persists across [`allocate`](Self::allocate) calls
/// (filter changes, date navigation) and is only dropped with the allocator
/// or via [`reset`](Self::reset). Stale ids of cards that never reappear
/// are harmless and are not evicted automatically.
///
/// Not internally synchronized; a multi-threaded host must serialize calls
/// on one instance. Independent calendar views each own their own instance.
#[derive(Debug, Default)]
pub struct LaneAllocator {
    lane_memory: HashMap<String, usize>,
}

impl LaneAllocator {
    pub fn new() -> Self {
        Self {
            lane_memory: HashMap::new(),
        }
    }

    /// Forget all remembered placements.
    pub fn reset(&mut self) {
        self.lane_memory.clear();
    }

    /// Lane the card was last placed on, if any.
    pub fn remembered_lane(&self, card_id: &str) -> Option<usize> {
        self.lane_memory.get(card_id).copied()
    }

    /// Number of remembered placements.
    pub fn memory_len(&self) -> usize {
        self.lane_memory.len()
    }

    /// Drop memory entries for ids not in `live_ids`.
    ///
    /// Opt-in bound on memory growth for long-running sessions with heavy
    /// card churn. Nothing in the engine calls this implicitly; forgetting
    /// an id only costs the card its lane continuity on the next pass.
    pub fn prune_memory<'a, I>(&mut self, live_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let live: std::collections::HashSet<&str> = live_ids.into_iter().collect();
        self.lane_memory.retain(|id, _| live.contains(id.as_str()));
    }

    /// Assign a lane and column span to every card visible in `days`.
    ///
    /// Cards are expected to already intersect the window (see
    /// [`visible_cards`](crate::filter::visible_cards)); a card that
    /// resolves to an inverted column span anyway is logged and skipped,
    /// never aborting the pass. Empty input or an empty day range yield an
    /// empty result.
    ///
    /// The one unconditional guarantee: no two returned assignments share
    /// a lane while overlapping in columns.
    pub fn allocate(&mut self, cards: &[CalendarCard], days: &[NaiveDate]) -> Vec<LaneAssignment> {
        let (window_start, window_end) = match (days.first(), days.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Vec::new(),
        };

        // Continuing cards started before the window and were potentially
        // already on screen; they get first claim on their remembered lanes.
        let (mut continuing, mut fresh): (Vec<&CalendarCard>, Vec<&CalendarCard>) =
            cards.iter().partition(|c| c.start_date < window_start);

        continuing.sort_by(|a, b| {
            match (self.remembered_lane(&a.id), self.remembered_lane(&b.id)) {
                (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                // Stable sort keeps input order for the unremembered tail.
                (None, None) => Ordering::Equal,
            }
        });

        fresh.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| b.duration_days().cmp(&a.duration_days()))
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut lanes: Vec<Vec<(usize, usize)>> = Vec::new();
        let mut assignments = Vec::with_capacity(cards.len());

        for card in continuing.into_iter().chain(fresh) {
            let (start_col, end_col) =
                match resolve_columns(card, window_start, days.len()) {
                    Some(span) => span,
                    None => {
                        tracing::warn!(
                            "skipping card '{}': resolved column span is inverted \
                             (range {}..={} outside window {}..={})",
                            card.id,
                            card.start_date,
                            card.end_date,
                            window_start,
                            window_end,
                        );
                        continue;
                    }
                };

            let remembered = self.remembered_lane(&card.id);
            let lane = match remembered {
                // Remembered lanes are honored even past the current row
                // count; stability outranks dense numbering.
                Some(l) if lane_fits(&lanes, l, start_col, end_col) => l,
                _ => first_free_lane(&lanes, start_col, end_col),
            };

            if lane >= lanes.len() {
                lanes.resize_with(lane + 1, Vec::new);
            }
            lanes[lane].push((start_col, end_col));
            self.lane_memory.insert(card.id.clone(), lane);

            assignments.push(LaneAssignment {
                card_id: card.id.clone(),
                lane,
                start_col,
                end_col,
                open_start: card.start_date < window_start,
                open_end: card.end_date > window_end,
            });
        }

        debug_assert!(assignments.iter().all(|a| a.lane < lanes.len()));
        assignments
    }
}

/// Clamp a card's date range to window columns.
///
/// A start before the window clamps up to column 0, an end past the window
/// clamps down to the last column. Returns `None` when the span inverts,
/// which only happens for cards entirely outside the window.
fn resolve_columns(
    card: &CalendarCard,
    window_start: NaiveDate,
    days_len: usize,
) -> Option<(usize, usize)> {
    let start_off = (card.start_date - window_start).num_days().max(0);
    let end_off = (card.end_date - window_start)
        .num_days()
        .min(days_len as i64 - 1);

    if start_off > end_off {
        return None;
    }
    Some((start_off as usize, end_off as usize))
}

fn span_fits(lane: &[(usize, usize)], start_col: usize, end_col: usize) -> bool {
    lane.iter().all(|&(s, e)| end_col < s || start_col > e)
}

fn lane_fits(lanes: &[Vec<(usize, usize)>], lane: usize, start_col: usize, end_col: usize) -> bool {
    lanes.get(lane).map_or(true, |l| span_fits(l, start_col, end_col))
}

fn first_free_lane(lanes: &[Vec<(usize, usize)>], start_col: usize, end_col: usize) -> usize {
    lanes
        .iter()
        .position(|l| span_fits(l, start_col, end_col))
        .unwrap_or(lanes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{days_for, ViewMode};
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Seven-day window starting Monday 2025-03-10.
    fn week() -> Vec<NaiveDate> {
        days_for(d(2025, 3, 12), ViewMode::Week)
    }

    fn day0() -> NaiveDate {
        d(2025, 3, 10)
    }

    fn card(id: &str, start_off: i64, end_off: i64) -> CalendarCard {
        CalendarCard::new(
            id,
            format!("Card {id}"),
            day0() + Duration::days(start_off),
            day0() + Duration::days(end_off),
        )
    }

    fn by_id<'a>(assignments: &'a [LaneAssignment], id: &str) -> &'a LaneAssignment {
        assignments
            .iter()
            .find(|a| a.card_id == id)
            .unwrap_or_else(|| panic!("no assignment for {id}"))
    }

    #[test]
    fn disjoint_cards_share_lane_zero() {
        let mut allocator = LaneAllocator::new();
        let cards = vec![card("a", 0, 1), card("b", 3, 4)];
        let out = allocator.allocate(&cards, &week());

        let a = by_id(&out, "a");
        let b = by_id(&out, "b");
        assert_eq!((a.lane, a.start_col, a.end_col), (0, 0, 1));
        assert_eq!((b.lane, b.start_col, b.end_col), (0, 3, 4));
        assert!(!a.open_start && !a.open_end && !b.open_start && !b.open_end);
        assert_eq!(lane_count(&out), 1);
    }

    #[test]
    fn longer_card_wins_lane_zero_on_overlap() {
        let mut allocator = LaneAllocator::new();
        // Both start inside the window; a spans six days, b two.
        let cards = vec![card("b", 2, 3), card("a", 0, 5)];
        let out = allocator.allocate(&cards, &week());

        assert_eq!(by_id(&out, "a").lane, 0);
        assert_eq!(by_id(&out, "b").lane, 1);
    }

    #[test]
    fn same_start_longer_duration_first() {
        let mut allocator = LaneAllocator::new();
        let cards = vec![card("short", 1, 2), card("long", 1, 5)];
        let out = allocator.allocate(&cards, &week());

        assert_eq!(by_id(&out, "long").lane, 0);
        assert_eq!(by_id(&out, "short").lane, 1);
    }

    #[test]
    fn both_side_open_card_spans_whole_window() {
        let mut allocator = LaneAllocator::new();
        let cards = vec![card("c", -3, 9)];
        let out = allocator.allocate(&cards, &week());

        let c = by_id(&out, "c");
        assert_eq!((c.start_col, c.end_col), (0, 6));
        assert!(c.open_start);
        assert!(c.open_end);
    }

    #[test]
    fn open_start_only() {
        let mut allocator = LaneAllocator::new();
        let out = allocator.allocate(&[card("c", -2, 3)], &week());
        let c = by_id(&out, "c");
        assert_eq!((c.start_col, c.end_col), (0, 3));
        assert!(c.open_start);
        assert!(!c.open_end);
    }

    #[test]
    fn open_end_only() {
        let mut allocator = LaneAllocator::new();
        let out = allocator.allocate(&[card("c", 4, 12)], &week());
        let c = by_id(&out, "c");
        assert_eq!((c.start_col, c.end_col), (4, 6));
        assert!(!c.open_start);
        assert!(c.open_end);
    }

    #[test]
    fn out_of_window_card_is_skipped_not_fatal() {
        let mut allocator = LaneAllocator::new();
        // "gone" ends before the window; the filter would normally drop it.
        let cards = vec![card("gone", -5, -2), card("kept", 1, 2)];
        let out = allocator.allocate(&cards, &week());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].card_id, "kept");
    }

    #[test]
    fn empty_inputs() {
        let mut allocator = LaneAllocator::new();
        assert!(allocator.allocate(&[], &week()).is_empty());
        assert!(allocator.allocate(&[card("a", 0, 1)], &[]).is_empty());
    }

    #[test]
    fn remembered_lane_is_kept_across_passes() {
        let mut allocator = LaneAllocator::new();
        let w1 = week();
        // "blocker" pushes "mover" to lane 1 in the first pass.
        let pass1 = vec![card("blocker", 0, 6), card("mover", 2, 9)];
        let out1 = allocator.allocate(&pass1, &w1);
        assert_eq!(by_id(&out1, "mover").lane, 1);

        // Next week: the blocker is gone, the mover continues in from the
        // left. It keeps lane 1 even though lane 0 is empty.
        let w2: Vec<NaiveDate> = w1.iter().map(|d| *d + Duration::days(7)).collect();
        let out2 = allocator.allocate(&[card("mover", 2, 9)], &w2);
        let mover = by_id(&out2, "mover");
        assert_eq!(mover.lane, 1);
        assert!(mover.open_start);
    }

    #[test]
    fn remembered_lane_yields_when_occupied() {
        let mut allocator = LaneAllocator::new();
        let w = week();
        let out1 = allocator.allocate(&[card("a", 0, 3)], &w);
        assert_eq!(by_id(&out1, "a").lane, 0);

        // A continuing card remembers lane 0; a new overlapping card shows
        // up. Continuing goes first, so the new card moves, not "a"... but
        // if a continuing card's remembered lane is taken by another
        // continuing card with a lower remembered lane, it scans upward.
        let mut allocator2 = LaneAllocator::new();
        allocator2.lane_memory.insert("x".into(), 0);
        allocator2.lane_memory.insert("y".into(), 0);
        let cards = vec![card("y", -1, 4), card("x", -2, 3)];
        let out2 = allocator2.allocate(&cards, &w);
        // Same remembered lane: id order decides who keeps it.
        assert_eq!(by_id(&out2, "x").lane, 0);
        assert_eq!(by_id(&out2, "y").lane, 1);
    }

    #[test]
    fn continuing_cards_precede_new_ones() {
        let mut allocator = LaneAllocator::new();
        let w = week();
        // Continuing card with no memory still goes before new cards and
        // takes lane 0 despite the new card starting earlier in the window.
        let cards = vec![card("new", 0, 5), card("cont", -3, 4)];
        let out = allocator.allocate(&cards, &w);
        assert_eq!(by_id(&out, "cont").lane, 0);
        assert_eq!(by_id(&out, "new").lane, 1);
    }

    #[test]
    fn memory_survives_reset_only() {
        let mut allocator = LaneAllocator::new();
        allocator.allocate(&[card("a", 0, 1)], &week());
        assert_eq!(allocator.remembered_lane("a"), Some(0));
        assert_eq!(allocator.memory_len(), 1);

        allocator.reset();
        assert_eq!(allocator.remembered_lane("a"), None);
        assert_eq!(allocator.memory_len(), 0);
    }

    #[test]
    fn prune_memory_retains_live_ids() {
        let mut allocator = LaneAllocator::new();
        allocator.allocate(&[card("a", 0, 1), card("b", 3, 4)], &week());
        assert_eq!(allocator.memory_len(), 2);

        allocator.prune_memory(["a"]);
        assert_eq!(allocator.remembered_lane("a"), Some(0));
        assert_eq!(allocator.remembered_lane("b"), None);
    }

    #[test]
    fn no_overlap_within_any_lane() {
        let mut allocator = LaneAllocator::new();
        let cards: Vec<CalendarCard> = (0..12i64)
            .map(|i| card(&format!("c{i}"), (i % 5) - 2, (i % 5) + i / 3))
            .collect();
        let out = allocator.allocate(&cards, &week());

        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert!(
                    a.lane != b.lane || !a.overlaps(b),
                    "{} and {} overlap in lane {}",
                    a.card_id,
                    b.card_id,
                    a.lane
                );
            }
        }
    }
}
