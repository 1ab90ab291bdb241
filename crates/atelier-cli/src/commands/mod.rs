//! CLI command implementations

mod brands;
mod core;
mod estimate;
mod import;
mod leads;
mod serve;

pub use brands::{cmd_brands_add, cmd_brands_list};
pub use core::{cmd_init, cmd_status, open_db, resolve_brand};
pub use estimate::cmd_estimate;
pub use import::cmd_import;
pub use leads::{cmd_leads_list, truncate};
pub use serve::cmd_serve;
