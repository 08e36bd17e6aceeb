use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::Bytes;

use crate::record_type::{class_mnemonic, type_mnemonic};
use crate::{DnsError, Name, RecordClass, RecordType};

const MAX_TXT_SEGMENT_LENGTH: usize = 255;

/// Record payload as handed over by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(Name),
    Cname(Name),
    Ptr(Name),
    Mx {
        priority: u16,
        exchange: Name,
    },
    Txt(Vec<String>),
    Soa {
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    },
    // Anything the decoder left undecoded
    Other(Bytes),
}

impl RecordData {
    /// Type implied by the payload, `None` for raw data.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            Self::A(_) => Some(RecordType::A),
            Self::Aaaa(_) => Some(RecordType::Aaaa),
            Self::Ns(_) => Some(RecordType::Ns),
            Self::Cname(_) => Some(RecordType::Cname),
            Self::Ptr(_) => Some(RecordType::Ptr),
            Self::Mx { .. } => Some(RecordType::Mx),
            Self::Txt(_) => Some(RecordType::Txt),
            Self::Soa { .. } => Some(RecordType::Soa),
            Self::Srv { .. } => Some(RecordType::Srv),
            Self::Other(_) => None,
        }
    }
}

impl Display for RecordData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A(ip) => write!(f, "{ip}"),
            Self::Aaaa(ip) => write!(f, "{ip}"),
            Self::Ns(name) | Self::Cname(name) | Self::Ptr(name) => write!(f, "{name}"),
            Self::Mx { priority, exchange } => write!(f, "{priority} {exchange}"),
            Self::Txt(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write_character_string(f, segment.as_bytes())?;
                }
                Ok(())
            }
            Self::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                f,
                "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}"
            ),
            Self::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{priority} {weight} {port} {target}"),
            // RFC 3597 generic form
            Self::Other(data) => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    f.write_str(" ")?;
                    for b in data.iter() {
                        write!(f, "{b:02x}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Quoted `<character-string>`, bytes outside printable ASCII as `\DDD`.
fn write_character_string(f: &mut std::fmt::Formatter<'_>, bytes: &[u8]) -> std::fmt::Result {
    f.write_str("\"")?;
    for &b in bytes {
        match b {
            b'"' | b'\\' => write!(f, "\\{}", b as char)?,
            0x20..=0x7e => write!(f, "{}", b as char)?,
            _ => write!(f, "\\{b:03}")?,
        }
    }
    f.write_str("\"")
}

/// A single decoded resource record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: Name,
    pub type_: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    /// Record of class IN whose type follows from `data`.
    ///
    /// Raw payloads carry no type and are rejected, use
    /// [`ResourceRecord::raw`] for those.
    pub fn new(name: Name, ttl: u32, data: RecordData) -> Result<Self, DnsError> {
        let type_ = data.record_type().ok_or(DnsError::UntypedRecordData)?;

        Ok(Self::typed(name, ttl, type_, data))
    }

    fn typed(name: Name, ttl: u32, type_: RecordType, data: RecordData) -> Self {
        Self {
            name,
            type_: type_.to_int(),
            class: RecordClass::In.to_int(),
            ttl,
            data,
        }
    }

    pub fn raw(name: Name, type_: u16, class: u16, ttl: u32, data: Bytes) -> Self {
        Self {
            name,
            type_,
            class,
            ttl,
            data: RecordData::Other(data),
        }
    }

    pub fn a(name: Name, ttl: u32, ip: Ipv4Addr) -> Self {
        Self::typed(name, ttl, RecordType::A, RecordData::A(ip))
    }

    pub fn aaaa(name: Name, ttl: u32, ip: Ipv6Addr) -> Self {
        Self::typed(name, ttl, RecordType::Aaaa, RecordData::Aaaa(ip))
    }

    pub fn ns(name: Name, ttl: u32, host: Name) -> Self {
        Self::typed(name, ttl, RecordType::Ns, RecordData::Ns(host))
    }

    pub fn cname(name: Name, ttl: u32, target: Name) -> Self {
        Self::typed(name, ttl, RecordType::Cname, RecordData::Cname(target))
    }

    pub fn txt<S: Into<String>>(
        name: Name,
        ttl: u32,
        segments: impl IntoIterator<Item = S>,
    ) -> Result<Self, DnsError> {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        if let Some(segment) = segments
            .iter()
            .find(|s| s.len() > MAX_TXT_SEGMENT_LENGTH)
        {
            return Err(DnsError::TxtSegmentTooLong(segment.len()));
        }

        Ok(Self::typed(
            name,
            ttl,
            RecordType::Txt,
            RecordData::Txt(segments),
        ))
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.class = class.to_int();
        self
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_int(self.type_)
    }
}

impl Display for ResourceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name,
            self.ttl,
            class_mnemonic(self.class),
            type_mnemonic(self.type_),
            self.data
        )
    }
}
