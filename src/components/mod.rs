pub mod alerts;
pub mod blog;
pub mod copy;
pub mod inputs;
pub mod login;
pub mod misc;
pub mod modal;
pub mod svg;
