//! Greedy bench allocation.

use seatplan_roster::{Roster, RoomShape};

use crate::grid::{Bench, SeatingGrid};
use crate::queue::AvailableQueue;

/// Seat two classes across the benches of a room.
///
/// Benches are filled front to back, left to right. For each bench the
/// earliest unseated student of `class1` is paired with the earliest
/// unseated student of `class2` sitting a different course. When every
/// remaining `class2` student shares that course, the head of `class2` is
/// taken anyway. A student is seated alone once the other class runs out.
///
/// Students that do not fit are left unplaced; checking capacity is the
/// caller's job. The pass never revisits an earlier bench.
pub fn allocate(class1: &Roster, class2: &Roster, shape: RoomShape) -> SeatingGrid {
    let mut first = AvailableQueue::new(class1);
    let mut second = AvailableQueue::new(class2);

    let benches: Vec<Bench> = (0..shape.benches())
        .map(|_| next_bench(&mut first, &mut second))
        .collect();

    SeatingGrid::from_benches(shape, benches)
}

fn next_bench(first: &mut AvailableQueue<'_>, second: &mut AvailableQueue<'_>) -> Bench {
    let Some(candidate) = first.peek() else {
        return match second.pop_front() {
            Some(student) => Bench::Single(student.roll_no.clone()),
            None => Bench::Empty,
        };
    };

    if let Some(pos) = second.position(|other| candidate.is_compatible_with(other)) {
        first.pop_front();
        let partner = second.take(pos);
        return Bench::Pair {
            first: candidate.roll_no.clone(),
            second: partner.roll_no.clone(),
            same_course: false,
        };
    }

    first.pop_front();
    match second.pop_front() {
        Some(partner) => Bench::Pair {
            first: candidate.roll_no.clone(),
            second: partner.roll_no.clone(),
            same_course: true,
        },
        None => Bench::Single(candidate.roll_no.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_roster::StudentRecord;

    fn roster(entries: &[(&str, &str)]) -> Roster {
        entries
            .iter()
            .map(|(roll, course)| StudentRecord::new(*roll, *course))
            .collect()
    }

    fn pair(first: &str, second: &str) -> Bench {
        Bench::Pair {
            first: first.to_string(),
            second: second.to_string(),
            same_course: false,
        }
    }

    fn shape(rows: u32, cols: u32) -> RoomShape {
        RoomShape::new(rows, cols).unwrap()
    }

    #[test]
    fn test_distinct_pair_then_leftover_alone() {
        let class1 = roster(&[("r1", "CS"), ("r2", "CS")]);
        let class2 = roster(&[("r3", "EE")]);

        let grid = allocate(&class1, &class2, shape(2, 1));

        assert_eq!(grid.get(0, 0), Some(&pair("r1", "r3")));
        assert_eq!(grid.get(1, 0), Some(&Bench::Single("r2".into())));
    }

    #[test]
    fn test_same_course_fallback() {
        let class1 = roster(&[("r1", "CS")]);
        let class2 = roster(&[("r2", "CS")]);

        let grid = allocate(&class1, &class2, shape(1, 1));

        assert_eq!(
            grid.get(0, 0),
            Some(&Bench::Pair {
                first: "r1".into(),
                second: "r2".into(),
                same_course: true,
            })
        );
        assert_eq!(grid.get(0, 0).unwrap().occupants(), vec!["r1", "r2"]);
    }

    #[test]
    fn test_empty_first_class_seats_second_alone() {
        let class1 = Roster::default();
        let class2 = roster(&[("r1", "CS")]);

        let grid = allocate(&class1, &class2, shape(1, 1));

        assert_eq!(grid.get(0, 0), Some(&Bench::Single("r1".into())));
    }

    #[test]
    fn test_empty_second_class_leaves_rest_empty() {
        let class1 = roster(&[("r1", "CS")]);
        let class2 = Roster::default();

        let grid = allocate(&class1, &class2, shape(2, 2));

        assert_eq!(grid.get(0, 0), Some(&Bench::Single("r1".into())));
        assert_eq!(grid.get(0, 1), Some(&Bench::Empty));
        assert_eq!(grid.get(1, 0), Some(&Bench::Empty));
        assert_eq!(grid.get(1, 1), Some(&Bench::Empty));
    }

    #[test]
    fn test_both_empty_gives_empty_grid() {
        let grid = allocate(&Roster::default(), &Roster::default(), shape(3, 2));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 2);
        assert!(grid.cells().all(|(_, _, bench)| bench.is_empty()));
    }

    #[test]
    fn test_skips_same_course_heads_for_earliest_compatible() {
        let class1 = roster(&[("a1", "CS"), ("a2", "EE")]);
        let class2 = roster(&[("b1", "CS"), ("b2", "CS"), ("b3", "ME"), ("b4", "EE")]);

        let grid = allocate(&class1, &class2, shape(1, 3));

        // a1 skips b1/b2 and takes b3; a2 then takes b1, the new head.
        assert_eq!(grid.get(0, 0), Some(&pair("a1", "b3")));
        assert_eq!(grid.get(0, 1), Some(&pair("a2", "b1")));
        // class1 exhausted: class2 heads sit alone.
        assert_eq!(grid.get(0, 2), Some(&Bench::Single("b2".into())));
    }

    #[test]
    fn test_greedy_does_not_backtrack() {
        // A perfect matching exists (a1-b2, a2-b1) but the greedy pass takes
        // b1 for a1 and leaves a2 with a same-course partner.
        let class1 = roster(&[("a1", "CS"), ("a2", "EE")]);
        let class2 = roster(&[("b1", "ME"), ("b2", "EE")]);

        let grid = allocate(&class1, &class2, shape(1, 2));

        assert_eq!(grid.get(0, 0), Some(&pair("a1", "b1")));
        assert_eq!(
            grid.get(0, 1),
            Some(&Bench::Pair {
                first: "a2".into(),
                second: "b2".into(),
                same_course: true,
            })
        );
    }

    #[test]
    fn test_over_capacity_leaves_students_unplaced() {
        let class1 = roster(&[("a1", "CS"), ("a2", "CS"), ("a3", "CS")]);
        let class2 = roster(&[("b1", "EE"), ("b2", "EE"), ("b3", "EE")]);

        let grid = allocate(&class1, &class2, shape(1, 2));

        let rolls: Vec<_> = grid.roll_numbers().collect();
        assert_eq!(rolls, vec!["a1", "b1", "a2", "b2"]);
        assert_eq!(grid.summary().placed, 4);
    }

    #[test]
    fn test_single_course_everywhere_always_falls_back() {
        let class1 = roster(&[("a1", "CS"), ("a2", "CS")]);
        let class2 = roster(&[("b1", "CS"), ("b2", "CS")]);

        let summary = allocate(&class1, &class2, shape(2, 1)).summary();

        assert_eq!(summary.same_course_pairs, 2);
        assert_eq!(summary.pairs, 0);
    }
}
