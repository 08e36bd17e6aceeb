use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::DnsError;

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// A validated domain name.
///
/// Labels are 1 to 63 octets of printable ASCII other than space, the whole
/// name at most 253 octets.
///
/// Equality and hashing ignore ASCII case, so `WWW.Example.com` and
/// `www.example.com` are the same name.
#[derive(Debug, Clone)]
pub struct Name {
    /// The domain name without its trailing dot
    /// E.g. www.google.com
    name: String,

    /// This is a vector of all the indices where a label starts
    /// E.g. www.google.com would have a split_indices of [0, 4, 11]
    split_indices: Vec<usize>,
}

impl Name {
    pub fn new(name: &str) -> Result<Self, DnsError> {
        let name = name.strip_suffix('.').unwrap_or(name);

        if name.is_empty() {
            return Ok(Self::root());
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(DnsError::NameTooLong(name.len()));
        }

        let mut split_indices = vec![0];
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DnsError::EmptyLabel);
            }

            if label.len() > MAX_LABEL_LENGTH {
                return Err(DnsError::LabelTooLong(label.to_owned()));
            }

            if !label.bytes().all(|b| b.is_ascii_graphic()) {
                return Err(DnsError::InvalidCharacter(label.to_owned()));
            }
        }
        split_indices.extend(name.match_indices('.').map(|(i, _)| i + 1));

        Ok(Self {
            name: name.to_owned(),
            split_indices,
        })
    }

    pub fn root() -> Self {
        Self {
            name: String::new(),
            split_indices: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Labels from left to right
    /// Eg www.google.com -> [www, google, com]
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.split_indices.iter().enumerate().map(|(n, start)| {
            let end = self
                .split_indices
                .get(n + 1)
                .map(|next| next - 1)
                .unwrap_or(self.name.len());
            &self.name[*start..end]
        })
    }

    pub fn num_labels(&self) -> usize {
        self.split_indices.len()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        f.write_str(".")
    }
}
