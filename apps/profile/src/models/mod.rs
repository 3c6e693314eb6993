pub mod existing;
pub mod profile;
pub mod skill;
