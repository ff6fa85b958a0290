use ag_core::payload::Calculation;

use crate::eval::evaluate;
use crate::format::format_number;

/// Drop everything but digits, operators, parentheses, the decimal point
/// and spaces.
pub fn sanitize(expression: &str) -> String {
    expression
        .chars()
        .filter(|c| c.is_ascii_digit() || "+-*/(). ".contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn generate(expression: &str) -> Calculation {
    let sanitized = sanitize(expression);
    let received = format!("Получено выражение: {expression}");

    match evaluate(&sanitized) {
        Ok(value) => {
            let value = if value == 0.0 { 0.0 } else { value };
            Calculation {
                steps: vec![
                    received,
                    format!("Вычисление: {sanitized} = {}", format_number(value)),
                ],
                expression: expression.to_string(),
                sanitized,
                result: Some(value),
                error: None,
            }
        }
        Err(err) => {
            tracing::debug!(%expression, error = %err, "expression rejected");
            Calculation {
                steps: vec![received, format!("Ошибка: {err}")],
                expression: expression.to_string(),
                sanitized,
                result: None,
                error: Some(err.to_string()),
            }
        }
    }
}
