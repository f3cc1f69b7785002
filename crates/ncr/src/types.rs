use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn from_hexadecimal(hexadecimal: bool) -> Self {
        if hexadecimal {
            Radix::Hexadecimal
        } else {
            Radix::Decimal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    // BMP units are always written in decimal.
    pub radix: Radix,
    pub named: bool,
    pub markup: bool,
}

impl EncodeOptions {
    pub fn hexadecimal(hexadecimal: bool) -> Self {
        Self {
            radix: Radix::from_hexadecimal(hexadecimal),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub hexadecimal: bool,
    #[serde(default)]
    pub named: bool,
    #[serde(default)]
    pub markup: bool,
    #[serde(default)]
    pub strict: bool,
}

impl CodecConfig {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            radix: Radix::from_hexadecimal(self.hexadecimal),
            named: self.named,
            markup: self.markup,
        }
    }
}
