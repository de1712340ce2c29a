use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, index: usize) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| ChartError::NonNumericInput {
        index,
        found: value.to_string(),
    })
}

/// Coerces loosely typed JSON values into finite numbers.
///
/// Numbers pass through, numeric strings are parsed exactly (decimal first,
/// scientific notation second). Anything else is rejected with the index of
/// the offending element.
pub fn coerce_numeric(values: &[Value]) -> ChartResult<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| coerce_one(value, index))
        .collect()
}

fn coerce_one(value: &Value, index: usize) -> ChartResult<f64> {
    let reject = || ChartError::NonNumericInput {
        index,
        found: value.to_string(),
    };

    let number = match value {
        Value::Number(number) => number.as_f64().ok_or_else(reject)?,
        Value::String(text) => {
            let text = text.trim();
            match Decimal::from_str(text) {
                Ok(decimal) => decimal_to_f64(decimal, index)?,
                Err(_) => Decimal::from_scientific(text)
                    .map_err(|_| reject())
                    .and_then(|decimal| decimal_to_f64(decimal, index))?,
            }
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            return Err(reject());
        }
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(reject())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        let values = coerce_numeric(&[json!(1), json!("2.5"), json!(" 3 "), json!("1e2")])
            .expect("coerce");
        assert_eq!(values, vec![1.0, 2.5, 3.0, 100.0]);
    }

    #[test]
    fn rejects_non_numeric_with_index() {
        let err = coerce_numeric(&[json!(1), json!(true)]).expect_err("bool");
        assert!(matches!(err, ChartError::NonNumericInput { index: 1, .. }));

        let err = coerce_numeric(&[json!("abc")]).expect_err("text");
        assert!(matches!(err, ChartError::NonNumericInput { index: 0, .. }));

        let err = coerce_numeric(&[json!(null)]).expect_err("null");
        assert!(matches!(err, ChartError::NonNumericInput { index: 0, .. }));
    }
}
