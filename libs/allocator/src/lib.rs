//! # seatplan-allocator
//!
//! Seats two class rosters on the two-seat benches of an exam hall so that,
//! wherever possible, bench mates sit different courses.
//!
//! ## Algorithm
//!
//! A single greedy pass over the benches in row-major order. Each run owns
//! one availability queue per roster (indices into the roster, in upload
//! order); students leave a queue when seated and never return. For every
//! bench:
//!
//! 1. With the first class exhausted, the next student of the second class
//!    sits alone, or the bench stays empty.
//! 2. Otherwise the head of the first class is paired with the earliest
//!    remaining second-class student of a different course.
//! 3. Failing that, it is paired with the head of the second class anyway.
//! 4. With the second class exhausted, it sits alone.
//!
//! The pass is deterministic, does no I/O, and never backtracks. It does not
//! look for a maximum matching; earlier benches take the first fit.

mod allocate;
mod grid;
mod queue;

pub use allocate::allocate;
pub use grid::{Bench, GridSummary, SeatingGrid};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use seatplan_roster::{Roster, RoomShape, StudentRecord};

    use super::*;

    const COURSES: [&str; 3] = ["CS", "EE", "ME"];

    /// Roster with unique roll numbers `{prefix}{n}` and courses drawn from `COURSES`.
    fn arb_roster(prefix: &'static str) -> impl Strategy<Value = Roster> {
        proptest::collection::vec(0..COURSES.len(), 0..24).prop_map(move |courses| {
            courses
                .into_iter()
                .enumerate()
                .map(|(n, c)| StudentRecord::new(format!("{prefix}{n}"), COURSES[c]))
                .collect()
        })
    }

    fn arb_shape() -> impl Strategy<Value = RoomShape> {
        (1u32..8, 1u32..8).prop_map(|(rows, cols)| RoomShape::new(rows, cols).unwrap())
    }

    proptest! {
        #[test]
        fn grid_matches_requested_shape(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let grid = allocate(&class1, &class2, shape);
            prop_assert_eq!(grid.row_count(), shape.rows() as usize);
            prop_assert_eq!(grid.rows().count(), shape.rows() as usize);
            for row in grid.rows() {
                prop_assert_eq!(row.len(), shape.cols() as usize);
            }
        }

        #[test]
        fn every_student_seated_at_most_once(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let grid = allocate(&class1, &class2, shape);
            let known: HashSet<&str> = class1
                .iter()
                .chain(class2.iter())
                .map(|s| s.roll_no.as_str())
                .collect();

            let mut seen = HashSet::new();
            for roll_no in grid.roll_numbers() {
                prop_assert!(known.contains(roll_no));
                prop_assert!(seen.insert(roll_no), "{} seated twice", roll_no);
            }
        }

        #[test]
        fn seats_everyone_who_fits(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let grid = allocate(&class1, &class2, shape);
            let total = (class1.len() + class2.len()) as u64;
            let placed = grid.summary().placed as u64;
            // Singles waste a seat, so only the lower bound is exact when
            // one class is much larger.
            prop_assert!(placed <= total);
            prop_assert!(placed >= total.min(shape.benches()));
        }

        #[test]
        fn pairs_keep_class_order_on_the_bench(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let grid = allocate(&class1, &class2, shape);
            for (_, _, bench) in grid.cells() {
                if let Bench::Pair { first, second, .. } = bench {
                    prop_assert!(first.starts_with('a'));
                    prop_assert!(second.starts_with('b'));
                }
            }
        }

        #[test]
        fn same_course_flag_matches_courses(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let course_of = |roll: &str| {
                class1
                    .iter()
                    .chain(class2.iter())
                    .find(|s| s.roll_no == roll)
                    .map(|s| s.course.clone())
            };
            let grid = allocate(&class1, &class2, shape);
            for (_, _, bench) in grid.cells() {
                if let Bench::Pair { first, second, same_course } = bench {
                    let clash = course_of(first.as_str()) == course_of(second.as_str());
                    prop_assert_eq!(*same_course, clash);
                }
            }
        }

        #[test]
        fn first_bench_pairs_compatible_heads(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            let grid = allocate(&class1, &class2, shape);
            if let (Some(a), Some(b)) = (class1.get(0), class2.get(0)) {
                if a.is_compatible_with(b) {
                    let expected = Bench::Pair {
                        first: a.roll_no.clone(),
                        second: b.roll_no.clone(),
                        same_course: false,
                    };
                    prop_assert_eq!(grid.get(0, 0), Some(&expected));
                }
            }
        }

        #[test]
        fn allocation_is_deterministic(
            class1 in arb_roster("a"),
            class2 in arb_roster("b"),
            shape in arb_shape(),
        ) {
            prop_assert_eq!(
                allocate(&class1, &class2, shape),
                allocate(&class1, &class2, shape)
            );
        }
    }
}
