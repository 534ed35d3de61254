//! Keyword choices forwarded to pyscal.

use std::str::FromStr;

use crate::config::ForwardModelConfig;

/// Gas-oil saturation table keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasOilKeyword {
    Sgof,
    Slgof,
}

impl GasOilKeyword {
    pub fn is_slgof(self) -> bool {
        self == Self::Slgof
    }
}

impl FromStr for GasOilKeyword {
    type Err = String;

    /// Case-insensitive; only `sgof` and `slgof` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sgof" => Ok(Self::Sgof),
            "slgof" => Ok(Self::Slgof),
            _ => Err(s.to_string()),
        }
    }
}

/// Eclipse keyword family.
///
/// Family 1 is SWOF + SGOF (or SLGOF), family 2 is SWFN + SGFN + SOF3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordFamily {
    One,
    Two,
}

impl KeywordFamily {
    pub fn is_family2(self) -> bool {
        self == Self::Two
    }
}

impl FromStr for KeywordFamily {
    type Err = String;

    /// Only the integers 1 and 2 are accepted. Any other text, including
    /// integers too large for a machine word, is returned as the error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(Self::One),
            Ok(2) => Ok(Self::Two),
            _ => Err(s.to_string()),
        }
    }
}

/// Translates the sheet argument; `None` means the first sheet.
///
/// Both `"0"` and the sentinel select the first sheet, so a sheet literally
/// named `0` is only reachable when it is the first one.
pub fn sheet_selection(sheet_name: &str, config: &ForwardModelConfig) -> Option<String> {
    if sheet_name == "0" || config.is_unset(sheet_name) {
        None
    } else {
        Some(sheet_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAGIC_NONE;

    #[test]
    fn test_gasoil_keyword_case_insensitive() {
        assert_eq!("sgof".parse::<GasOilKeyword>(), Ok(GasOilKeyword::Sgof));
        assert_eq!("SGOF".parse::<GasOilKeyword>(), Ok(GasOilKeyword::Sgof));
        assert_eq!("SlGoF".parse::<GasOilKeyword>(), Ok(GasOilKeyword::Slgof));
        assert_eq!("sof3".parse::<GasOilKeyword>(), Err("sof3".to_string()));
        assert_eq!("".parse::<GasOilKeyword>(), Err(String::new()));
    }

    #[test]
    fn test_family() {
        assert_eq!("1".parse::<KeywordFamily>(), Ok(KeywordFamily::One));
        assert_eq!("+2".parse::<KeywordFamily>(), Ok(KeywordFamily::Two));
        assert_eq!("0".parse::<KeywordFamily>(), Err("0".to_string()));
        assert_eq!("-1".parse::<KeywordFamily>(), Err("-1".to_string()));
        assert!(KeywordFamily::Two.is_family2());
        assert!(!KeywordFamily::One.is_family2());
    }

    #[test]
    fn test_family_beyond_i64() {
        let huge = "99999999999999999999";
        assert_eq!(huge.parse::<KeywordFamily>(), Err(huge.to_string()));
    }

    #[test]
    fn test_sheet_selection() {
        let config = ForwardModelConfig::default();
        assert_eq!(sheet_selection("0", &config), None);
        assert_eq!(sheet_selection(MAGIC_NONE, &config), None);
        assert_eq!(sheet_selection("SCAL", &config), Some("SCAL".to_string()));
        assert_eq!(sheet_selection("00", &config), Some("00".to_string()));
    }
}
