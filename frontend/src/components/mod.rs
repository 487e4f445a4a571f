pub mod layout;
pub mod notification_modal;
