use car_mapper::mapper::{CarMapper, CarMapping};
use car_mapper::model::{Car, CarDto, CarType};

/// One mapper shared by many tasks on a multi-threaded runtime.
/// Every task must see the same result as a sequential call.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mapper_is_safe_to_share_across_tasks() {
    let mapper = CarMapper::new();
    let car = Car::new("Ford", 5, CarType::Sport);
    let expected = mapper.car_to_car_dto(Some(&car)).unwrap();

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let car = car.clone();
            tokio::spawn(async move {
                let dto = mapper.car_to_car_dto(Some(&car)).unwrap();
                let back = mapper.car_dto_to_car(Some(&dto)).unwrap().unwrap();
                (dto, back)
            })
        })
        .collect();

    for handle in handles {
        let (dto, back) = handle.await.expect("task panicked");
        assert_eq!(dto, expected);
        assert_eq!(back, car);
        assert_eq!(back.car_type(), Some(CarType::Sport));
    }
}

#[tokio::test]
async fn test_rejection_is_reported_from_spawned_task() {
    let mapper = CarMapper::new();
    let dto = CarDto::new("Ford", 5, "HOVERCRAFT");

    let result = tokio::spawn(async move { mapper.car_dto_to_car(Some(&dto)) })
        .await
        .unwrap();

    assert!(result.is_err());
}
