//! Dashboard rendering components, one module per region or tab.

pub mod collaboration;
pub mod database;
pub mod footer;
pub mod header;
pub mod modals;
pub mod nav;
pub mod overview;
pub mod safety;
pub mod simulation_tab;
pub mod training;
pub mod visualization;
