//! Demo driver: maps a sample car to its DTO and back.

use car_mapper::error::MapperError;
use car_mapper::mapper::{CarMapper, CarMapping};
use car_mapper::model::{Car, CarType};
use car_mapper::runtime::setup_tracing;
use tracing::{error, info};

fn run(mapper: &impl CarMapping) -> Result<(), MapperError> {
    let car = Car::new("Ford", 5, CarType::Sport);
    info!(%car, "Mapping car to dto");

    let Some(car_dto) = mapper.car_to_car_dto(Some(&car)) else {
        return Ok(());
    };
    println!("{car_dto}");
    match serde_json::to_string(&car_dto) {
        Ok(json) => info!(%json, "Dto serialized"),
        Err(e) => error!(error = %e, "Dto serialization failed"),
    }

    let Some(new_car) = mapper.car_dto_to_car(Some(&car_dto))? else {
        return Ok(());
    };
    println!("{new_car}");
    println!("{}", new_car == car);
    Ok(())
}

fn main() -> Result<(), MapperError> {
    setup_tracing();

    info!("Starting car mapper demo");

    let mapper = CarMapper::new();
    if let Err(e) = run(&mapper) {
        error!(error = %e, "Mapping failed");
        return Err(e);
    }

    info!("Demo completed successfully");
    Ok(())
}
