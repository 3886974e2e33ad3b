use crate::error::MapperError;
use std::fmt::Display;
use std::str::FromStr;

/// Body style of a [`Car`](crate::model::Car).
///
/// Every member has a canonical upper-case name (see [`CarType::name`]).
/// That name is what travels in [`CarDto`](crate::model::CarDto), and it is the
/// only spelling [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarType {
    Sport,
    Sedan,
    Hatchback,
    Suv,
    Coupe,
    Convertible,
    Minivan,
    Pickup,
    Van,
    Wagon,
    Other,
}

impl CarType {
    /// Every member, in declaration order.
    pub const ALL: [CarType; 11] = [
        CarType::Sport,
        CarType::Sedan,
        CarType::Hatchback,
        CarType::Suv,
        CarType::Coupe,
        CarType::Convertible,
        CarType::Minivan,
        CarType::Pickup,
        CarType::Van,
        CarType::Wagon,
        CarType::Other,
    ];

    /// Canonical name of this member, e.g. `"SPORT"`.
    pub const fn name(self) -> &'static str {
        match self {
            CarType::Sport => "SPORT",
            CarType::Sedan => "SEDAN",
            CarType::Hatchback => "HATCHBACK",
            CarType::Suv => "SUV",
            CarType::Coupe => "COUPE",
            CarType::Convertible => "CONVERTIBLE",
            CarType::Minivan => "MINIVAN",
            CarType::Pickup => "PICKUP",
            CarType::Van => "VAN",
            CarType::Wagon => "WAGON",
            CarType::Other => "OTHER",
        }
    }
}

impl Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CarType {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarType::ALL
            .into_iter()
            .find(|member| member.name() == s)
            .ok_or_else(|| MapperError::unknown_enum_value("CarType", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_member_parses_from_its_own_name() {
        for member in CarType::ALL {
            assert_eq!(member.name().parse::<CarType>(), Ok(member));
            assert_eq!(member.to_string(), member.name());
        }
    }

    #[test]
    fn parsing_is_exact_and_case_sensitive() {
        for input in ["sport", "Sport", " SPORT", "SPORT ", ""] {
            let err = input.parse::<CarType>().unwrap_err();
            assert_eq!(
                err,
                MapperError::UnknownEnumValue {
                    enum_name: "CarType",
                    value: input.to_string(),
                }
            );
        }
    }

    #[test]
    fn unknown_name_reports_enum_and_value() {
        let err = "HOVERCRAFT".parse::<CarType>().unwrap_err();
        assert_eq!(err.to_string(), "No enum constant CarType.HOVERCRAFT");
    }
}
