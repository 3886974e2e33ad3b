//! # Car Mapper
//!
//! > **Field-to-field mapping between a domain record and its DTO.**
//!
//! [`Car`](model::Car) is the domain value; [`CarDto`](model::CarDto) is its
//! serializable projection. The mapper copies `make` unchanged, renames
//! `number_of_seats` to `seat_count`, and carries the [`CarType`](model::CarType)
//! as its upper-case name.
//!
//! ## Module Tour
//!
//! ### 1. The Values ([`model`])
//! Immutable value objects with accessors. `Car` compares on `make` and
//! `number_of_seats` only; `CarDto` compares on every field.
//!
//! ### 2. The Mapper ([`mapper`])
//! - **Key items**: [`CarMapping`](mapper::CarMapping), [`CarMapper`](mapper::CarMapper).
//! - Absent in, absent out. A DTO whose type name is not an exact member name fails
//!   with [`MapperError::UnknownEnumValue`](error::MapperError::UnknownEnumValue).
//!
//! ### 3. Observability ([`runtime`])
//! `tracing` throughout; [`setup_tracing`](runtime::setup_tracing) installs a
//! subscriber filtered by `RUST_LOG`.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod error;
pub mod mapper;
pub mod model;
pub mod runtime;
