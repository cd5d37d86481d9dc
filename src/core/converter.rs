use crate::domain::model::{ConversionRequest, FormatField, NumberFormat};
use crate::utils::error::ConversionError;

impl ConversionRequest {
    /// 由路徑的三個片段建立請求：先檢查輸入格式，再解析數值，最後檢查輸出格式
    pub fn from_segments(
        value: &str,
        input_format: &str,
        output_format: &str,
    ) -> Result<Self, ConversionError> {
        let input = parse_format(FormatField::Input, input_format)?;
        let value = parse_value(value, input)?;
        let output = parse_format(FormatField::Output, output_format)?;
        Ok(Self {
            value,
            input,
            output,
        })
    }

    pub fn execute(&self) -> String {
        render(self.value, self.output)
    }
}

/// Converts `value` from `input_format` to `output_format`.
pub fn convert(
    value: &str,
    input_format: &str,
    output_format: &str,
) -> Result<String, ConversionError> {
    ConversionRequest::from_segments(value, input_format, output_format)
        .map(|request| request.execute())
}

fn parse_format(field: FormatField, token: &str) -> Result<NumberFormat, ConversionError> {
    token
        .parse()
        .map_err(|_| ConversionError::UnsupportedFormat {
            field,
            format: token.to_string(),
        })
}

pub fn parse_value(value: &str, format: NumberFormat) -> Result<i64, ConversionError> {
    i64::from_str_radix(value, format.radix()).map_err(|_| ConversionError::InvalidValue {
        value: value.to_string(),
    })
}

/// Sign-magnitude rendering: `-255` in hex is `-ff`, never a two's complement pattern.
pub fn render(number: i64, format: NumberFormat) -> String {
    let magnitude = number.unsigned_abs();
    let digits = match format {
        NumberFormat::Dec => magnitude.to_string(),
        NumberFormat::Bin => format!("{:b}", magnitude),
        NumberFormat::Hex => format!("{:x}", magnitude),
    };

    if number < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}
