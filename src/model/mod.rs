pub mod axis;
pub mod command;
pub mod flags;
pub mod record;
pub mod variant;
