//! Value objects for the product domain.

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, DomainError, ValidationError};

/// Unit price of a product.
///
/// Always finite and strictly greater than zero. Every arithmetic operation
/// builds a fresh `Price`, so results are held to the same rule.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting zero, negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_infinite() {
            return Err(ValidationError::NonFinitePrice { value }.reject());
        }
        if value.is_nan() || value <= 0.0 {
            return Err(ValidationError::NonPositivePrice { value }.reject());
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds another price.
    pub fn add(&self, other: Price) -> Result<Price, ValidationError> {
        Price::new(self.0 + other.0)
    }

    /// Subtracts another price. Fails unless the result stays positive.
    pub fn subtract(&self, other: Price) -> Result<Price, ValidationError> {
        Price::new(self.0 - other.0)
    }

    /// Scales the price by a factor. Fails if the factor is not positive.
    pub fn multiply(&self, factor: f64) -> Result<Price, ValidationError> {
        Price::new(self.0 * factor)
    }

    /// Divides the price by a divisor.
    pub fn divide(&self, divisor: f64) -> Result<Price, DomainError> {
        if divisor == 0.0 {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        Ok(Price::new(self.0 / divisor)?)
    }

    pub fn is_greater_than(&self, other: &Price) -> bool {
        self > other
    }

    pub fn is_less_than(&self, other: &Price) -> bool {
        self < other
    }

    pub fn is_greater_than_or_equal_to(&self, other: &Price) -> bool {
        self >= other
    }

    pub fn is_less_than_or_equal_to(&self, other: &Price) -> bool {
        self <= other
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Units of a product on hand. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Stock(i64);

impl Stock {
    /// Creates a stock level, rejecting negative values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::NegativeStock { value }.reject());
        }
        Ok(Self(value))
    }

    /// Returns an empty stock level.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the number of units.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Adds units.
    pub fn add(&self, other: Stock) -> Result<Stock, DomainError> {
        let total = self
            .0
            .checked_add(other.0)
            .ok_or(ArithmeticError::Overflow { operation: "stock add" })?;
        Ok(Stock::new(total)?)
    }

    /// Removes units. Taking more than is available fails; the result is never clamped.
    pub fn subtract(&self, other: Stock) -> Result<Stock, ValidationError> {
        // Both operands are non-negative, so this cannot overflow.
        Stock::new(self.0 - other.0)
    }

    pub fn is_greater_than(&self, other: &Stock) -> bool {
        self > other
    }

    pub fn is_less_than(&self, other: &Stock) -> bool {
        self < other
    }

    pub fn is_greater_than_or_equal_to(&self, other: &Stock) -> bool {
        self >= other
    }

    pub fn is_less_than_or_equal_to(&self, other: &Stock) -> bool {
        self <= other
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Stock {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Stock::new(value)
    }
}

impl From<Stock> for i64 {
    fn from(stock: Stock) -> Self {
        stock.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    fn stock(value: i64) -> Stock {
        Stock::new(value).unwrap()
    }

    #[test]
    fn test_price_rejects_non_positive() {
        assert_eq!(
            Price::new(0.0),
            Err(ValidationError::NonPositivePrice { value: 0.0 })
        );
        assert_eq!(
            Price::new(-1.0),
            Err(ValidationError::NonPositivePrice { value: -1.0 })
        );
        assert!(Price::new(0.01).is_ok());
    }

    #[test]
    fn test_price_rejects_nan_and_infinity() {
        assert!(matches!(
            Price::new(f64::NAN),
            Err(ValidationError::NonPositivePrice { .. })
        ));
        assert!(matches!(
            Price::new(f64::INFINITY),
            Err(ValidationError::NonFinitePrice { .. })
        ));
    }

    #[test]
    fn test_price_arithmetic() {
        let a = price(10.0);
        let b = price(2.5);

        assert_eq!(a.add(b).unwrap().value(), 12.5);
        assert_eq!(a.subtract(b).unwrap().value(), 7.5);
        assert_eq!(a.multiply(3.0).unwrap().value(), 30.0);
        assert_eq!(a.divide(4.0).unwrap().value(), 2.5);
    }

    #[test]
    fn test_price_subtract_to_zero_fails() {
        let a = price(10.0);
        assert!(matches!(
            a.subtract(a),
            Err(ValidationError::NonPositivePrice { .. })
        ));
        assert!(a.subtract(price(15.0)).is_err());
    }

    #[test]
    fn test_price_multiply_by_non_positive_fails() {
        assert!(price(10.0).multiply(0.0).is_err());
        assert!(price(10.0).multiply(-2.0).is_err());
    }

    #[test]
    fn test_price_divide_by_zero() {
        assert!(matches!(
            price(10.0).divide(0.0),
            Err(DomainError::Arithmetic(ArithmeticError::DivisionByZero))
        ));
        assert!(matches!(
            price(10.0).divide(-2.0),
            Err(DomainError::Validation(
                ValidationError::NonPositivePrice { .. }
            ))
        ));
    }

    #[test]
    fn test_price_overflow_is_rejected() {
        assert!(matches!(
            price(f64::MAX).multiply(2.0),
            Err(ValidationError::NonFinitePrice { .. })
        ));
    }

    #[test]
    fn test_price_comparison() {
        let low = price(1.0);
        let high = price(2.0);

        assert!(high.is_greater_than(&low));
        assert!(low.is_less_than(&high));
        assert!(low.is_greater_than_or_equal_to(&price(1.0)));
        assert!(low.is_less_than_or_equal_to(&price(1.0)));
        assert!(!low.is_greater_than(&price(1.0)));
        assert_eq!(low, price(1.0));
        assert_ne!(low, high);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(price(15.0).to_string(), "15");
        assert_eq!(price(9.99).to_string(), "9.99");
    }

    #[test]
    fn test_price_deserialization_validates() {
        let ok: Price = serde_json::from_str("19.5").unwrap();
        assert_eq!(ok.value(), 19.5);
        assert_eq!(serde_json::to_string(&ok).unwrap(), "19.5");

        assert!(serde_json::from_str::<Price>("0").is_err());
        assert!(serde_json::from_str::<Price>("-3.5").is_err());
    }

    #[test]
    fn test_stock_rejects_negative() {
        assert_eq!(
            Stock::new(-1),
            Err(ValidationError::NegativeStock { value: -1 })
        );
        assert_eq!(Stock::new(0).unwrap(), Stock::zero());
    }

    #[test]
    fn test_stock_arithmetic() {
        assert_eq!(stock(5).add(stock(3)).unwrap().value(), 8);
        assert_eq!(stock(5).subtract(stock(5)).unwrap().value(), 0);
    }

    #[test]
    fn test_stock_subtract_more_than_available_fails() {
        assert_eq!(
            stock(5).subtract(stock(10)),
            Err(ValidationError::NegativeStock { value: -5 })
        );
    }

    #[test]
    fn test_stock_add_overflow() {
        assert!(matches!(
            stock(i64::MAX).add(stock(1)),
            Err(DomainError::Arithmetic(ArithmeticError::Overflow { .. }))
        ));
    }

    #[test]
    fn test_stock_comparison() {
        assert!(stock(3).is_greater_than(&stock(2)));
        assert!(stock(2).is_less_than(&stock(3)));
        assert!(stock(2).is_greater_than_or_equal_to(&stock(2)));
        assert!(stock(2).is_less_than_or_equal_to(&stock(2)));
    }

    #[test]
    fn test_stock_serialization() {
        assert_eq!(serde_json::to_string(&stock(12)).unwrap(), "12");
        assert!(serde_json::from_str::<Stock>("-1").is_err());
        assert_eq!(stock(12).to_string(), "12");
    }
}
