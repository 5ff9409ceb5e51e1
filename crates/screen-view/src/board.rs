//! Kanban grouping by status.

use screen_model::{Status, StatusCounts};
use screen_transform::DerivedRow;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardLane<'a> {
    pub status: Status,
    /// Highest composite score first.
    pub rows: Vec<DerivedRow<'a>>,
}

impl BoardLane<'_> {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a> {
    /// Shortlisted, Borderline, Rejected.
    pub lanes: [BoardLane<'a>; 3],
}

impl<'a> Board<'a> {
    pub fn lane(&self, status: Status) -> &BoardLane<'a> {
        match status {
            Status::Shortlisted => &self.lanes[0],
            Status::Borderline => &self.lanes[1],
            Status::Rejected => &self.lanes[2],
        }
    }

    /// Card counts of the visible rows.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            shortlisted: self.lanes[0].count(),
            borderline: self.lanes[1].count(),
            rejected: self.lanes[2].count(),
        }
    }
}

/// Groups the visible rows into status lanes, best score first.
pub fn group_board<'a>(visible: &[DerivedRow<'a>]) -> Board<'a> {
    let mut ranked = visible.to_vec();
    ranked.sort_by(|a, b| b.composite_score.cmp(&a.composite_score));
    let lane = |status: Status| BoardLane {
        status,
        rows: ranked
            .iter()
            .filter(|row| row.status == status)
            .copied()
            .collect(),
    };
    Board {
        lanes: [
            lane(Status::Shortlisted),
            lane(Status::Borderline),
            lane(Status::Rejected),
        ],
    }
}
