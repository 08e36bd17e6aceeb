//! In-memory model of a decoded DNS response: the header, the echoed
//! questions and the answer, authority and additional sections.

mod error;
pub use error::DnsError;

mod header;
pub use header::{Flags, Header};

mod name;
pub use name::Name;

mod message;
pub use message::{ResponseMessage, Section};

mod question;
pub use question::Question;

mod resource_record;
pub use resource_record::{RecordData, ResourceRecord};

mod record_type;
pub use record_type::{RecordClass, RecordType};

mod response_code;
pub use response_code::{error_text, ResponseCode, UNKNOWN_ERROR_TEXT};
