// Intake form: validation, view state and the HTTP handlers that drive them.

pub mod handlers;
pub mod validation;
pub mod view;
