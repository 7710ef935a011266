pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_dialog;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
