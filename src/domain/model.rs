use std::fmt;
use std::str::FromStr;

/// URL 路徑中的格式代號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    Dec,
    Bin,
    Hex,
}

impl NumberFormat {
    pub const ALL: [NumberFormat; 3] = [NumberFormat::Dec, NumberFormat::Bin, NumberFormat::Hex];

    pub fn radix(self) -> u32 {
        match self {
            NumberFormat::Dec => 10,
            NumberFormat::Bin => 2,
            NumberFormat::Hex => 16,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            NumberFormat::Dec => "dec",
            NumberFormat::Bin => "bin",
            NumberFormat::Hex => "hex",
        }
    }
}

impl FromStr for NumberFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dec" => Ok(NumberFormat::Dec),
            "bin" => Ok(NumberFormat::Bin),
            "hex" => Ok(NumberFormat::Hex),
            _ => Err(()),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which path token a format error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatField {
    Input,
    Output,
}

impl fmt::Display for FormatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatField::Input => f.write_str("input"),
            FormatField::Output => f.write_str("output"),
        }
    }
}

/// 已驗證的轉換請求，數值在建立時即已解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub value: i64,
    pub input: NumberFormat,
    pub output: NumberFormat,
}
