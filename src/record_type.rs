use std::fmt::Display;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

#[derive(FromPrimitive, ToPrimitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A = 1,
    Ns = 2,
    Md = 3,
    Mf = 4,
    Cname = 5,
    Soa = 6,
    Mb = 7,
    Mg = 8,
    Mr = 9,
    Null = 10,
    Wks = 11,
    Ptr = 12,
    Hinfo = 13,
    Minfo = 14,
    Mx = 15,
    Txt = 16,
    Aaaa = 28,
    Srv = 33,
    Opt = 41,
    Any = 255,
}

impl RecordType {
    pub fn to_int(self) -> u16 {
        self as u16
    }

    pub fn from_int(value: u16) -> Option<Self> {
        Self::from_u16(value)
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Md => "MD",
            Self::Mf => "MF",
            Self::Cname => "CNAME",
            Self::Soa => "SOA",
            Self::Mb => "MB",
            Self::Mg => "MG",
            Self::Mr => "MR",
            Self::Null => "NULL",
            Self::Wks => "WKS",
            Self::Ptr => "PTR",
            Self::Hinfo => "HINFO",
            Self::Minfo => "MINFO",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Opt => "OPT",
            Self::Any => "ANY",
        };
        f.write_str(s)
    }
}

#[derive(FromPrimitive, ToPrimitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordClass {
    In = 1,
    Cs = 2,
    Ch = 3,
    Hs = 4,
    Any = 255,
}

impl RecordClass {
    pub fn to_int(self) -> u16 {
        self as u16
    }

    pub fn from_int(value: u16) -> Option<Self> {
        Self::from_u16(value)
    }
}

impl Display for RecordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::In => "IN",
            Self::Cs => "CS",
            Self::Ch => "CH",
            Self::Hs => "HS",
            Self::Any => "ANY",
        };
        f.write_str(s)
    }
}

/// Presentation form of a raw type value, `TYPE<n>` when it is not known.
pub(crate) fn type_mnemonic(value: u16) -> String {
    match RecordType::from_int(value) {
        Some(type_) => type_.to_string(),
        None => format!("TYPE{value}"),
    }
}

/// Presentation form of a raw class value, `CLASS<n>` when it is not known.
pub(crate) fn class_mnemonic(value: u16) -> String {
    match RecordClass::from_int(value) {
        Some(class) => class.to_string(),
        None => format!("CLASS{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_types() {
        assert_eq!(RecordType::from_int(28), Some(RecordType::Aaaa));
        assert_eq!(RecordType::Srv.to_int(), 33);
        assert_eq!(RecordType::from_int(999), None);
    }

    #[test]
    fn mnemonics_fall_back_to_numeric_form() {
        assert_eq!(type_mnemonic(1), "A");
        assert_eq!(type_mnemonic(65), "TYPE65");
        assert_eq!(class_mnemonic(1), "IN");
        assert_eq!(class_mnemonic(42), "CLASS42");
    }
}
