pub mod favorites;
pub mod foods;
pub mod orders;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(u64);

impl FoodId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> u64 {
        self.0
    }
}

impl From<u64> for FoodId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in hundredths of the currency unit.
///
/// The backend speaks decimal numbers (`"price": 19.9`); amounts are kept as
/// integer cents so that sums and products stay exact, and are written back
/// out as decimals.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cents(i64);

impl Cents {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Round a decimal amount to the nearest cent.
    pub fn from_decimal(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

}

// Arithmetic saturates: a price at the edge of the range must not panic
impl std::ops::Add for Cents {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Mul<u32> for Cents {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(i64::from(rhs)))
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_decimal())
    }
}

impl Serialize for Cents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom(format!(
                "invalid amount '{}': expected a finite number",
                value
            )));
        }
        Ok(Self::from_decimal(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_round_decimal_input() {
        assert_eq!(Cents::from_decimal(10.0), Cents::new(1000));
        assert_eq!(Cents::from_decimal(2.5), Cents::new(250));
        // 19.9 is not representable exactly; rounding must not drop a cent
        assert_eq!(Cents::from_decimal(19.9), Cents::new(1990));
        assert_eq!(Cents::from_decimal(0.1 + 0.2), Cents::new(30));
    }

    #[test]
    fn cents_arithmetic() {
        let extras: Cents = [Cents::new(250) * 2, Cents::new(100) * 0].into_iter().sum();
        let total = (Cents::new(1000) + extras) * 2;
        assert_eq!(total, Cents::new(3000));
        assert_eq!(total.to_string(), "30.00");
    }

    #[test]
    fn cents_saturate_at_the_edges() {
        let huge: Cents = serde_json::from_str("1e17").unwrap();
        assert_eq!(huge, Cents::new(i64::MAX));
        assert_eq!(huge * 2, Cents::new(i64::MAX));
        assert_eq!(huge + Cents::new(250), Cents::new(i64::MAX));

        let tiny: Cents = serde_json::from_str("-1e17").unwrap();
        assert_eq!(tiny * 3, Cents::new(i64::MIN));
        let total: Cents = [tiny, tiny].into_iter().sum();
        assert_eq!(total, Cents::new(i64::MIN));
    }

    #[test]
    fn cents_accept_integer_json_numbers() {
        let cents: Cents = serde_json::from_str("12").unwrap();
        assert_eq!(cents, Cents::new(1200));
        assert_eq!(serde_json::to_string(&Cents::new(1250)).unwrap(), "12.5");
    }

    #[test]
    fn food_id_is_a_plain_number_on_the_wire() {
        let id: FoodId = serde_json::from_str("7").unwrap();
        assert_eq!(id, FoodId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
