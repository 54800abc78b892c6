pub mod contact_view;
pub mod main_window;
pub mod sections;
pub mod sidebar;
