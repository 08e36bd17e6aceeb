use bitfield::bitfield;

use crate::response_code::ResponseCode;

bitfield! {
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Flags(u16);
    impl Debug;
    u8;
    // query or response
    pub qr, set_qr: 15;
    // query type
    pub opcode, set_opcode: 14, 11;
    // authoritative answerer
    pub aa, set_aa: 10;
    // truncation
    pub tc, set_tc: 9;
    // recursion desired
    pub rd, set_rd: 8;
    // recursion available
    pub ra, set_ra: 7;
    // reserved
    pub z, set_z: 6;
    pub ad, set_ad: 5;
    pub cd, set_cd: 4;
    // response code
    pub rcode, set_rcode: 3, 0;
}

impl Flags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Flags of a plain response carrying `code` in its 4 bit rcode field.
    /// Only the low 4 bits of `code` fit, see [`Header::with_extended_rcode`].
    pub fn response(code: ResponseCode) -> Self {
        let mut flags = Self::default();
        flags.set_qr(true);
        flags.set_rcode((code.to_int() & 0x0f) as u8);
        flags
    }
}

/// Decoded DNS message header.
///
/// Once handed to a [`ResponseMessage`](crate::ResponseMessage) it is only
/// reachable through a shared reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
    // upper 8 bits of the 12 bit rcode, from the OPT pseudo record
    pub extended_rcode: u8,
}

impl Header {
    pub fn new(id: u16, flags: Flags) -> Self {
        Self {
            id,
            flags,
            ..Default::default()
        }
    }

    pub fn with_random_id(flags: Flags) -> Self {
        Self::new(rand::random::<u16>(), flags)
    }

    /// Section counts as announced on the wire.
    pub fn with_counts(
        mut self,
        questions: u16,
        answers: u16,
        authorities: u16,
        additionals: u16,
    ) -> Self {
        self.num_questions = questions;
        self.num_answers = answers;
        self.num_authorities = authorities;
        self.num_additionals = additionals;
        self
    }

    pub fn with_extended_rcode(mut self, upper: u8) -> Self {
        self.extended_rcode = upper;
        self
    }

    /// Full response code, combining the EDNS extended bits with the header
    /// rcode.
    pub fn response_code(&self) -> u16 {
        (u16::from(self.extended_rcode) << 4) | u16::from(self.flags.rcode())
    }

    pub fn opcode(&self) -> u8 {
        self.flags.opcode()
    }

    pub fn is_response(&self) -> bool {
        self.flags.qr()
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags.aa()
    }

    pub fn is_truncated(&self) -> bool {
        self.flags.tc()
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags.rd()
    }

    pub fn recursion_available(&self) -> bool {
        self.flags.ra()
    }

    pub fn is_authentic_data(&self) -> bool {
        self.flags.ad()
    }

    pub fn is_checking_disabled(&self) -> bool {
        self.flags.cd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_flag_bits() {
        // qr, rd, ra, NXDOMAIN
        let header = Header::new(0xbeef, Flags::from_bits(0x8183));

        assert!(header.is_response());
        assert!(header.recursion_desired());
        assert!(header.recursion_available());
        assert!(!header.is_authoritative());
        assert!(!header.is_truncated());
        assert_eq!(header.opcode(), 0);
        assert_eq!(header.response_code(), 3);
    }

    #[test]
    fn combines_extended_rcode() {
        let header = Header::new(1, Flags::response(ResponseCode::BadCookie))
            .with_extended_rcode(1);

        assert_eq!(header.flags.rcode(), 7);
        assert_eq!(header.response_code(), ResponseCode::BadCookie.to_int());
    }

    #[test]
    fn keeps_counts() {
        let header = Header::new(7, Flags::default()).with_counts(1, 2, 3, 4);

        assert_eq!(header.id, 7);
        assert_eq!(
            (
                header.num_questions,
                header.num_answers,
                header.num_authorities,
                header.num_additionals
            ),
            (1, 2, 3, 4)
        );
    }
}
