pub mod add_line_modal;
pub mod header;
pub mod line_list;
pub mod power_line_card;
pub mod project_panel;
pub mod results_panel;
