//! Record mapping between [`Car`](crate::model::Car) and [`CarDto`](crate::model::CarDto).
//!
//! # Main Components
//!
//! - [`CarMapping`] - The mapping contract, with collection helpers provided
//! - [`CarMapper`] - Stateless implementation; pass it explicitly where needed
//! - [`conversions`] - `From`/`TryFrom` impls for present values

pub mod car_mapper;
pub mod conversions;

pub use car_mapper::*;
