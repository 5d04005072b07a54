pub mod section_a;
pub mod view;
pub mod view_model;

pub use view::PlannerPage;
pub use view_model::PlannerViewModel;
