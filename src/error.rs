use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("domain name is {0} octets, longer than 253")]
    NameTooLong(usize),
    #[error("label `{0}` is longer than 63 octets")]
    LabelTooLong(String),
    #[error("domain name contains an empty label")]
    EmptyLabel,
    #[error("label `{0}` contains a character outside printable ascii")]
    InvalidCharacter(String),
    #[error("record data has no implied type")]
    UntypedRecordData,
    #[error("txt segment is {0} octets, longer than 255")]
    TxtSegmentTooLong(usize),
}
