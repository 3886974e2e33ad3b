use crate::model::CarType;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A car as the domain sees it.
///
/// # Equality
/// Two cars are equal when their `make` and `number_of_seats` match. The
/// [`CarType`] is deliberately left out, so `Hash` follows the same two fields.
///
/// # Mapping
/// See [`CarDto`](crate::model::CarDto) for the serializable projection and
/// [`CarMapper`](crate::mapper::CarMapper) for the conversion in both directions.
#[derive(Debug, Clone, Default)]
pub struct Car {
    make: Option<String>,
    number_of_seats: i32,
    car_type: Option<CarType>,
}

impl Car {
    /// Creates a new Car instance.
    ///
    /// # Arguments
    /// * `make` - Manufacturer name
    /// * `number_of_seats` - Seat count, passed through unchecked
    /// * `car_type` - Body style
    pub fn new(make: impl Into<String>, number_of_seats: i32, car_type: CarType) -> Self {
        Self {
            make: Some(make.into()),
            number_of_seats,
            car_type: Some(car_type),
        }
    }

    /// Creates a Car from possibly-absent parts.
    ///
    /// Used by the mapper, where a DTO may carry no make or no type.
    pub fn from_parts(make: Option<String>, number_of_seats: i32, car_type: Option<CarType>) -> Self {
        Self {
            make,
            number_of_seats,
            car_type,
        }
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn number_of_seats(&self) -> i32 {
        self.number_of_seats
    }

    pub fn car_type(&self) -> Option<CarType> {
        self.car_type
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.make == other.make && self.number_of_seats == other.number_of_seats
    }
}

impl Eq for Car {}

impl Hash for Car {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.make.hash(state);
        self.number_of_seats.hash(state);
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car(make={}, numberOfSeats={}, type=",
            self.make.as_deref().unwrap_or("null"),
            self.number_of_seats
        )?;
        match self.car_type {
            Some(car_type) => write!(f, "{car_type})"),
            None => f.write_str("null)"),
        }
    }
}
