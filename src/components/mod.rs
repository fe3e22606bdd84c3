pub mod animated_background;
pub mod design_system;
pub mod inquiry_form;
pub mod layout;
