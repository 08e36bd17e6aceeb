use std::fmt::Display;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Text used for codes without an assigned meaning.
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown Error";

/// DNS response codes, including the extended codes carried through EDNS and
/// TSIG/TKEY.
#[derive(FromPrimitive, ToPrimitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError = 0,
    FormErr = 1,
    ServFail = 2,
    NxDomain = 3,
    NotImp = 4,
    Refused = 5,
    YxDomain = 6,
    YxRrSet = 7,
    NxRrSet = 8,
    NotAuth = 9,
    NotZone = 10,
    // Shared with BADSIG in TSIG responses
    BadVers = 16,
    BadKey = 17,
    BadTime = 18,
    BadMode = 19,
    BadName = 20,
    BadAlg = 21,
    BadTrunc = 22,
    BadCookie = 23,
}

impl ResponseCode {
    pub fn from_int(value: u16) -> Option<Self> {
        Self::from_u16(value)
    }

    pub fn to_int(self) -> u16 {
        self as u16
    }

    pub fn is_error(self) -> bool {
        self != Self::NoError
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::NoError => "No Error",
            Self::FormErr => "Format Error",
            Self::ServFail => "Server Failure",
            Self::NxDomain => "Non-Existent Domain",
            Self::NotImp => "Not Implemented",
            Self::Refused => "Query Refused",
            Self::YxDomain => "Name Exists when it should not",
            Self::YxRrSet => "RR Set Exists when it should not",
            Self::NxRrSet => "RR Set that should exist does not",
            Self::NotAuth => "Server Not Authoritative for zone",
            Self::NotZone => "Name not contained in zone",
            Self::BadVers => "Bad OPT Version or TSIG Signature Failure",
            Self::BadKey => "Key not recognized",
            Self::BadTime => "Signature out of time window",
            Self::BadMode => "Bad TKEY Mode",
            Self::BadName => "Duplicate key name",
            Self::BadAlg => "Algorithm not supported",
            Self::BadTrunc => "Bad Truncation",
            Self::BadCookie => "Bad/missing Server Cookie",
        }
    }
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NxDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
            Self::YxDomain => "YXDOMAIN",
            Self::YxRrSet => "YXRRSET",
            Self::NxRrSet => "NXRRSET",
            Self::NotAuth => "NOTAUTH",
            Self::NotZone => "NOTZONE",
            Self::BadVers => "BADVERS",
            Self::BadKey => "BADKEY",
            Self::BadTime => "BADTIME",
            Self::BadMode => "BADMODE",
            Self::BadName => "BADNAME",
            Self::BadAlg => "BADALG",
            Self::BadTrunc => "BADTRUNC",
            Self::BadCookie => "BADCOOKIE",
        };
        f.write_str(s)
    }
}

/// Human readable text for any response code value. Never fails; codes with
/// no assigned meaning map to [`UNKNOWN_ERROR_TEXT`].
pub fn error_text(code: u16) -> &'static str {
    ResponseCode::from_int(code)
        .map(ResponseCode::text)
        .unwrap_or(UNKNOWN_ERROR_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(error_text(2), "Server Failure");
        assert_eq!(error_text(3), "Non-Existent Domain");
        assert_eq!(ResponseCode::from_int(23), Some(ResponseCode::BadCookie));
        assert_eq!(ResponseCode::NxDomain.to_string(), "NXDOMAIN");
    }

    #[test]
    fn unassigned_codes_degrade_to_generic_text() {
        for code in [11, 15, 24, 3841, u16::MAX] {
            assert_eq!(ResponseCode::from_int(code), None);
            assert_eq!(error_text(code), UNKNOWN_ERROR_TEXT);
        }
    }

    #[test]
    fn lookup_is_total_and_non_empty() {
        assert!((0..=u16::MAX).all(|code| !error_text(code).is_empty()));
    }
}
