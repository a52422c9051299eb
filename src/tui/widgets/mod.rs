//! Widget rendering functions, one module per panel.

pub mod header_bar;
pub mod message_info;
pub mod preview;
pub mod recipients;
pub mod selector;
pub mod status_bar;
pub mod subject_input;
pub mod suggestion;
