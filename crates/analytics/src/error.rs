use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error("Retention rate must be below 100%, got {0}%")]
    RetentionOutOfRange(Decimal),

    #[error("Price per unit ({price}) must exceed the variable cost per unit ({variable_cost})")]
    NonPositiveMargin {
        price: Decimal,
        variable_cost: Decimal,
    },

    #[error("Input '{field}' must not be negative, got {value}")]
    NegativeInput { field: &'static str, value: Decimal },

    #[error("Input '{field}' must be a percentage between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: Decimal },

    #[error("Numeric overflow while calculating '{0}'")]
    Overflow(String),
}
