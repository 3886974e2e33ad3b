use crate::error::MapperError;
use crate::model::{Car, CarDto};
use tracing::{debug, trace, warn};

/// Mapping contract between [`Car`] and [`CarDto`].
///
/// Implementations must be pure: the same input always yields the same output,
/// and nothing is retained between calls. Absent inputs map to absent outputs.
pub trait CarMapping: Send + Sync {
    /// Projects a car onto its DTO.
    ///
    /// `number_of_seats` becomes `seat_count`, and the type becomes its name.
    fn car_to_car_dto(&self, car: Option<&Car>) -> Option<CarDto>;

    /// Rebuilds a car from its DTO.
    ///
    /// # Errors
    /// [`MapperError::UnknownEnumValue`] if the DTO's type is present but is not
    /// the exact name of a [`CarType`](crate::model::CarType) member.
    fn car_dto_to_car(&self, dto: Option<&CarDto>) -> Result<Option<Car>, MapperError>;

    /// Maps every car in order.
    fn cars_to_car_dtos(&self, cars: &[Car]) -> Vec<CarDto> {
        cars.iter()
            .filter_map(|car| self.car_to_car_dto(Some(car)))
            .collect()
    }

    /// Maps every DTO in order, stopping at the first unknown type name.
    fn car_dtos_to_cars(&self, dtos: &[CarDto]) -> Result<Vec<Car>, MapperError> {
        let mut cars = Vec::with_capacity(dtos.len());
        for dto in dtos {
            if let Some(car) = self.car_dto_to_car(Some(dto))? {
                cars.push(car);
            }
        }
        Ok(cars)
    }
}

/// Stateless [`CarMapping`] implementation.
///
/// Zero-sized, so construct one wherever it is needed and pass it by reference:
///
/// ```
/// use car_mapper::mapper::{CarMapper, CarMapping};
/// use car_mapper::model::{Car, CarType};
///
/// let mapper = CarMapper::new();
/// let dto = mapper.car_to_car_dto(Some(&Car::new("Ford", 5, CarType::Sport))).unwrap();
/// assert_eq!(dto.seat_count(), 5);
/// assert_eq!(dto.car_type(), Some("SPORT"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CarMapper;

impl CarMapper {
    pub fn new() -> Self {
        Self
    }
}

impl CarMapping for CarMapper {
    fn car_to_car_dto(&self, car: Option<&Car>) -> Option<CarDto> {
        let Some(car) = car else {
            trace!("car_to_car_dto called without a car");
            return None;
        };
        debug!(?car, "car_to_car_dto called");
        Some(CarDto::from(car))
    }

    fn car_dto_to_car(&self, dto: Option<&CarDto>) -> Result<Option<Car>, MapperError> {
        let Some(dto) = dto else {
            trace!("car_dto_to_car called without a dto");
            return Ok(None);
        };
        debug!(?dto, "car_dto_to_car called");
        Car::try_from(dto).map(Some).inspect_err(|e| {
            warn!(error = %e, car_type = ?dto.car_type(), "Rejected car dto");
        })
    }
}
