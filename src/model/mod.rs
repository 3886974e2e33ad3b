//! Value objects on both sides of the mapping.

pub mod car;
pub mod car_dto;
pub mod car_type;

pub use car::*;
pub use car_dto::*;
pub use car_type::*;
