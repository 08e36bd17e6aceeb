use std::fmt::Display;

use crate::record_type::{class_mnemonic, type_mnemonic};
use crate::{Name, RecordClass, RecordType};

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: Name,
    pub type_: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: Name, type_: RecordType) -> Self {
        Self {
            name,
            type_: type_.to_int(),
            class: RecordClass::In.to_int(),
        }
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.class = class.to_int();
        self
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_int(self.type_)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.name,
            class_mnemonic(self.class),
            type_mnemonic(self.type_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_internet_class() {
        let question = Question::new(Name::new("example.com").unwrap(), RecordType::Mx);

        assert_eq!(question.class, 1);
        assert_eq!(question.record_type(), Some(RecordType::Mx));
        assert_eq!(question.to_string(), "example.com. IN MX");
    }

    #[test]
    fn displays_unknown_type() {
        let mut question = Question::new(Name::new("example.com").unwrap(), RecordType::A)
            .with_class(RecordClass::Ch);
        question.type_ = 65;

        assert_eq!(question.record_type(), None);
        assert_eq!(question.to_string(), "example.com. CH TYPE65");
    }
}
