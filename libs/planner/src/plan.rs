//! Seating plan preparation.
//!
//! The planner resolves both classes and the room, rejects requests the
//! allocator must never see, runs the allocator, and wraps the grid in a
//! document ready for display or export.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use seatplan_allocator::{allocate, GridSummary, SeatingGrid};
use seatplan_roster::RoomShape;

use crate::error::{PlanError, PlanResult};
use crate::provider::{ClassRecord, RoomProvider, RoomRecord, RosterProvider};

/// Format used for the plan date when the request carries none.
pub const DEFAULT_DATE_FORMAT: &str = "%dth %b %Y";

/// Request to seat two classes in one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub class1_name: String,
    pub class2_name: String,
    pub room_name: String,

    /// Date printed on the plan; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl AllocationRequest {
    pub fn new(
        class1_name: impl Into<String>,
        class2_name: impl Into<String>,
        room_name: impl Into<String>,
    ) -> Self {
        Self {
            class1_name: class1_name.into(),
            class2_name: class2_name.into(),
            room_name: room_name.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Room dimensions echoed on the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanRoomConfiguration {
    pub rows: u32,
    pub cols: u32,
    pub total_capacity: u64,
}

impl From<RoomShape> for PlanRoomConfiguration {
    fn from(shape: RoomShape) -> Self {
        Self {
            rows: shape.rows(),
            cols: shape.cols(),
            total_capacity: shape.capacity(),
        }
    }
}

/// A completed seating plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingPlan {
    /// Room name as stored.
    pub hall: String,
    pub date: String,
    pub grid: SeatingGrid,
    pub class1: String,
    pub class2: String,
    pub total_students_class1: usize,
    pub total_students_class2: usize,
    pub room_configuration: PlanRoomConfiguration,
    pub summary: GridSummary,
}

/// Builds seating plans from stored classes and rooms.
pub struct Planner<R, M> {
    rosters: R,
    rooms: M,
}

impl<R: RosterProvider, M: RoomProvider> Planner<R, M> {
    /// Create a planner over a roster source and a room source.
    pub fn new(rosters: R, rooms: M) -> Self {
        Self { rosters, rooms }
    }

    /// Prepare a plan dated today unless the request names a date.
    pub fn plan(&self, request: &AllocationRequest) -> PlanResult<SeatingPlan> {
        self.plan_on(request, Local::now().date_naive())
    }

    /// Prepare a plan, using `today` when the request names no date.
    #[instrument(
        skip(self, request),
        fields(
            class1 = %request.class1_name,
            class2 = %request.class2_name,
            room = %request.room_name,
        )
    )]
    pub fn plan_on(&self, request: &AllocationRequest, today: NaiveDate) -> PlanResult<SeatingPlan> {
        let result = self.build(request, today);
        if let Err(e) = &result {
            warn!(kind = e.kind(), error = %e, "Seating plan rejected");
        }
        result
    }

    fn build(&self, request: &AllocationRequest, today: NaiveDate) -> PlanResult<SeatingPlan> {
        let class1 = self.resolve_class(&request.class1_name)?;
        let class2 = self.resolve_class(&request.class2_name)?;
        let room = self
            .rooms
            .room(&request.room_name)?
            .ok_or_else(|| PlanError::RoomNotFound(request.room_name.clone()))?;

        let shape = validate(request, &class1, &class2, &room)?;

        debug!(
            class1_students = class1.students.len(),
            class2_students = class2.students.len(),
            rows = shape.rows(),
            cols = shape.cols(),
            "Inputs resolved"
        );

        let grid = allocate(&class1.students, &class2.students, shape);
        let summary = grid.summary();

        info!(
            pairs = summary.pairs,
            same_course_pairs = summary.same_course_pairs,
            singles = summary.singles,
            empty = summary.empty,
            placed = summary.placed,
            "Seating plan ready"
        );

        let date = request
            .date
            .clone()
            .unwrap_or_else(|| today.format(DEFAULT_DATE_FORMAT).to_string());

        Ok(SeatingPlan {
            hall: room.room_name,
            date,
            class1: request.class1_name.clone(),
            class2: request.class2_name.clone(),
            total_students_class1: class1.students.len(),
            total_students_class2: class2.students.len(),
            room_configuration: PlanRoomConfiguration::from(grid.shape()),
            grid,
            summary,
        })
    }

    fn resolve_class(&self, class_name: &str) -> PlanResult<ClassRecord> {
        self.rosters
            .class(class_name)?
            .ok_or_else(|| PlanError::ClassNotFound(class_name.to_string()))
    }
}

/// Check the allocator's preconditions.
fn validate(
    request: &AllocationRequest,
    class1: &ClassRecord,
    class2: &ClassRecord,
    room: &RoomRecord,
) -> PlanResult<RoomShape> {
    if class1.students.is_empty() {
        return Err(PlanError::EmptyRoster(request.class1_name.clone()));
    }
    if class2.students.is_empty() {
        return Err(PlanError::EmptyRoster(request.class2_name.clone()));
    }

    let config = room.configuration;
    let invalid = || PlanError::InvalidShape {
        room_name: request.room_name.clone(),
        rows: config.rows,
        cols: config.cols,
    };
    let rows = u32::try_from(config.rows).map_err(|_| invalid())?;
    let cols = u32::try_from(config.cols).map_err(|_| invalid())?;
    let shape = RoomShape::new(rows, cols).map_err(|_| invalid())?;

    let total_students = (class1.students.len() + class2.students.len()) as u64;
    let capacity = shape.capacity();
    if total_students > capacity {
        return Err(PlanError::CapacityExceeded {
            total_students,
            capacity,
            overage: total_students - capacity,
        });
    }

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;
    use seatplan_allocator::Bench;
    use seatplan_roster::{Roster, StudentRecord};

    use super::*;
    use crate::ProviderError;

    #[derive(Default)]
    struct Fixture {
        classes: HashMap<String, ClassRecord>,
        rooms: HashMap<String, RoomRecord>,
    }

    impl Fixture {
        fn with_class(mut self, name: &str, students: &[(&str, &str)]) -> Self {
            let roster: Roster = students
                .iter()
                .map(|(roll, course)| StudentRecord::new(*roll, *course))
                .collect();
            self.classes
                .insert(name.to_string(), ClassRecord::new(name, roster));
            self
        }

        fn with_room(mut self, name: &str, rows: i64, cols: i64) -> Self {
            self.rooms
                .insert(name.to_string(), RoomRecord::new(name, rows, cols));
            self
        }
    }

    impl RosterProvider for Fixture {
        fn class(&self, class_name: &str) -> Result<Option<ClassRecord>, ProviderError> {
            Ok(self.classes.get(class_name).cloned())
        }
    }

    impl RoomProvider for Fixture {
        fn room(&self, room_name: &str) -> Result<Option<RoomRecord>, ProviderError> {
            Ok(self.rooms.get(room_name).cloned())
        }
    }

    struct Broken;

    impl RosterProvider for Broken {
        fn class(&self, _: &str) -> Result<Option<ClassRecord>, ProviderError> {
            Err(ProviderError::new(
                "listing classes",
                std::io::Error::other("disk gone"),
            ))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn standard() -> Fixture {
        Fixture::default()
            .with_class("cse", &[("r1", "CS"), ("r2", "CS")])
            .with_class("ece", &[("r3", "EE")])
            .with_class("empty", &[])
            .with_room("hall-a", 2, 1)
            .with_room("broken", 0, 4)
            .with_room("negative", -1, 4)
            .with_room("tiny", 1, 1)
            .with_room("huge", i64::from(u32::MAX), i64::from(u32::MAX))
            .with_room("overflow", i64::from(u32::MAX) + 1, 1)
    }

    #[test]
    fn test_plan_seats_distinct_courses_first() {
        let fixture = standard();
        let planner = Planner::new(&fixture, &fixture);

        let plan = planner
            .plan_on(&AllocationRequest::new("cse", "ece", "hall-a"), today())
            .unwrap();

        assert_eq!(plan.hall, "hall-a");
        assert_eq!(plan.date, "14th Mar 2025");
        assert_eq!(plan.total_students_class1, 2);
        assert_eq!(plan.total_students_class2, 1);
        assert_eq!(
            plan.room_configuration,
            PlanRoomConfiguration {
                rows: 2,
                cols: 1,
                total_capacity: 4,
            }
        );
        assert_eq!(plan.grid.get(0, 0).unwrap().occupants(), vec!["r1", "r3"]);
        assert_eq!(plan.grid.get(1, 0), Some(&Bench::Single("r2".into())));
        assert_eq!(plan.summary.placed, 3);
    }

    #[test]
    fn test_plan_keeps_requested_date() {
        let fixture = standard();
        let planner = Planner::new(&fixture, &fixture);

        let request = AllocationRequest::new("cse", "ece", "hall-a").with_date("1st Apr 2025");
        let plan = planner.plan_on(&request, today()).unwrap();

        assert_eq!(plan.date, "1st Apr 2025");
    }

    #[test]
    fn test_plan_serializes_grid_as_roll_lists() {
        let fixture = standard();
        let planner = Planner::new(&fixture, &fixture);

        let plan = planner
            .plan_on(&AllocationRequest::new("cse", "ece", "hall-a"), today())
            .unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["grid"], serde_json::json!([[["r1", "r3"]], [["r2"]]]));
        assert_eq!(json["room_configuration"]["total_capacity"], 4);
        assert_eq!(json["class1"], "cse");
    }

    #[rstest]
    #[case::missing_first_class("nope", "ece", "hall-a", "not_found", "class 'nope' not found")]
    #[case::missing_second_class("cse", "nope", "hall-a", "not_found", "class 'nope' not found")]
    #[case::missing_room("cse", "ece", "nope", "not_found", "room 'nope' not found")]
    #[case::empty_first_class("empty", "ece", "hall-a", "empty_roster", "class 'empty' has no students")]
    #[case::empty_second_class("cse", "empty", "hall-a", "empty_roster", "class 'empty' has no students")]
    #[case::zero_rows(
        "cse",
        "ece",
        "broken",
        "invalid_shape",
        "room 'broken' has invalid configuration: 0 rows x 4 cols"
    )]
    #[case::negative_rows(
        "cse",
        "ece",
        "negative",
        "invalid_shape",
        "room 'negative' has invalid configuration: -1 rows x 4 cols"
    )]
    #[case::too_many_benches(
        "cse",
        "ece",
        "huge",
        "invalid_shape",
        "room 'huge' has invalid configuration: 4294967295 rows x 4294967295 cols"
    )]
    #[case::rows_beyond_u32(
        "cse",
        "ece",
        "overflow",
        "invalid_shape",
        "room 'overflow' has invalid configuration: 4294967296 rows x 1 cols"
    )]
    #[case::over_capacity(
        "cse",
        "ece",
        "tiny",
        "capacity_exceeded",
        "total students (3) exceeds room capacity (2) by 1"
    )]
    fn test_plan_rejections(
        #[case] class1: &str,
        #[case] class2: &str,
        #[case] room: &str,
        #[case] kind: &str,
        #[case] message: &str,
    ) {
        let fixture = standard();
        let planner = Planner::new(&fixture, &fixture);

        let err = planner
            .plan_on(&AllocationRequest::new(class1, class2, room), today())
            .unwrap_err();

        assert_eq!(err.kind(), kind);
        assert_eq!(err.to_string(), message);
        assert!(err.is_rejection());
    }

    #[test]
    fn test_capacity_overage_is_reported() {
        let fixture = standard();
        let planner = Planner::new(&fixture, &fixture);

        let err = planner
            .plan_on(&AllocationRequest::new("cse", "ece", "tiny"), today())
            .unwrap_err();

        assert!(matches!(
            err,
            PlanError::CapacityExceeded {
                total_students: 3,
                capacity: 2,
                overage: 1,
            }
        ));
    }

    #[test]
    fn test_exact_capacity_is_accepted() {
        let fixture = standard()
            .with_class("pair-a", &[("a1", "CS")])
            .with_class("pair-b", &[("b1", "CS")]);
        let planner = Planner::new(&fixture, &fixture);

        let plan = planner
            .plan_on(&AllocationRequest::new("pair-a", "pair-b", "tiny"), today())
            .unwrap();

        assert_eq!(plan.summary.same_course_pairs, 1);
    }

    #[test]
    fn test_provider_failure_is_not_a_rejection() {
        let rooms = standard();
        let planner = Planner::new(Broken, &rooms);

        let err = planner
            .plan_on(&AllocationRequest::new("cse", "ece", "hall-a"), today())
            .unwrap_err();

        assert_eq!(err.kind(), "provider");
        assert!(!err.is_rejection());
        assert_eq!(err.to_string(), "storage error: listing classes: disk gone");
    }
}
