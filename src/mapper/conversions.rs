//! `From` / `TryFrom` conversions between [`Car`] and [`CarDto`].
//!
//! These handle present values only. Absent inputs are handled one level up, in
//! [`CarMapper`](crate::mapper::CarMapper).

use crate::error::MapperError;
use crate::model::{Car, CarDto, CarType};

impl From<&Car> for CarDto {
    fn from(car: &Car) -> Self {
        CarDto::from_parts(
            car.make().map(str::to_owned),
            car.number_of_seats(),
            car.car_type().map(|car_type| car_type.name().to_owned()),
        )
    }
}

impl From<Car> for CarDto {
    fn from(car: Car) -> Self {
        CarDto::from(&car)
    }
}

impl TryFrom<&CarDto> for Car {
    type Error = MapperError;

    fn try_from(dto: &CarDto) -> Result<Self, Self::Error> {
        let car_type = dto.car_type().map(str::parse::<CarType>).transpose()?;
        Ok(Car::from_parts(
            dto.make().map(str::to_owned),
            dto.seat_count(),
            car_type,
        ))
    }
}

impl TryFrom<CarDto> for Car {
    type Error = MapperError;

    fn try_from(dto: CarDto) -> Result<Self, Self::Error> {
        Car::try_from(&dto)
    }
}
