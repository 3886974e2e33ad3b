use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Serializable projection of a [`Car`](crate::model::Car).
///
/// `number_of_seats` travels as `seatCount`, and the [`CarType`](crate::model::CarType)
/// travels as its name in `type`. Unlike `Car`, equality covers every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    seat_count: i32,
    #[serde(default, rename = "type")]
    car_type: Option<String>,
}

impl CarDto {
    /// Creates a new CarDto instance.
    ///
    /// The type name is stored as given; it is only checked when mapped back to a
    /// [`Car`](crate::model::Car).
    pub fn new(make: impl Into<String>, seat_count: i32, car_type: impl Into<String>) -> Self {
        Self {
            make: Some(make.into()),
            seat_count,
            car_type: Some(car_type.into()),
        }
    }

    pub fn from_parts(make: Option<String>, seat_count: i32, car_type: Option<String>) -> Self {
        Self {
            make,
            seat_count,
            car_type,
        }
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn seat_count(&self) -> i32 {
        self.seat_count
    }

    pub fn car_type(&self) -> Option<&str> {
        self.car_type.as_deref()
    }
}

impl Display for CarDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CarDto(make={}, seatCount={}, type={})",
            self.make.as_deref().unwrap_or("null"),
            self.seat_count,
            self.car_type.as_deref().unwrap_or("null")
        )
    }
}
