//! Value Objects - Immutable, identity-less domain primitives

mod city_directory;
mod relative_day;

pub use city_directory::CityDirectory;
pub use relative_day::{InvalidRelativeDay, RelativeDay};
