pub mod header;
pub mod upload_area;
pub mod file_actions;
pub mod result_panel;
pub mod progress_bar;
