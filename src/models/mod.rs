pub mod birthdate;
pub mod cell;
pub mod stats;
pub mod view_mode;
pub mod view_state;
