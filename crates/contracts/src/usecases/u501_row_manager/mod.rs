pub mod events;
pub mod manager;
pub mod planner;

pub use events::PlannerEvent;
pub use manager::RowManager;
pub use planner::Planner;

use crate::usecases::common::UseCaseMetadata;

pub struct PlanRows;

impl UseCaseMetadata for PlanRows {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "row_manager"
    }

    fn display_name() -> &'static str {
        "ROTA Planner"
    }

    fn description() -> &'static str {
        "Use case rows, execution links for P0/R0/T1 and the ROTA summary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(PlanRows::full_name(), "u501_row_manager");
    }
}
