//! The fixed patch recipes this tool ships.

mod dashboard;
mod detail_page;

pub use dashboard::{update_dashboard, LANDING_PAGE};
pub use detail_page::{fix_detail, DETAIL_PAGE};

use crate::recipe::Recipe;

/// Every recipe, in no particular order; they touch disjoint files.
pub fn all() -> Vec<Recipe> {
    vec![fix_detail(), update_dashboard()]
}
