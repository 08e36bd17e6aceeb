use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::response_code::{error_text, ResponseCode};
use crate::{Header, Question, RecordType, ResourceRecord};

/// The three resource record sections of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Answer => "answer",
            Self::Authority => "authority",
            Self::Additional => "additional",
        };
        f.write_str(s)
    }
}

/// A decoded DNS response.
///
/// The decoder builds it section by section through the `add_*` methods,
/// then hands it to readers. Every read accessor returns its own snapshot of
/// the section, so a view obtained earlier is never changed by later
/// additions, and a published message can be read from many threads at once
/// without locking.
#[derive(Debug, Clone)]
pub struct ResponseMessage {
    header: Header,
    questions: Vec<Arc<Question>>,
    answers: Vec<Arc<ResourceRecord>>,
    authorities: Vec<Arc<ResourceRecord>>,
    additionals: Vec<Arc<ResourceRecord>>,
}

impl ResponseMessage {
    pub fn new(header: Header) -> Self {
        debug!(
            id = header.id,
            rcode = header.response_code(),
            "new response message"
        );

        Self {
            header,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(Arc::new(question));
        trace!(len = self.questions.len(), "added question");
    }

    #[instrument(level = "trace", skip_all, fields(section = %section))]
    pub fn add_record(&mut self, section: Section, record: ResourceRecord) {
        let records = self.records_mut(section);
        records.push(Arc::new(record));
        trace!(len = records.len(), "added record");
    }

    pub fn add_answer(&mut self, record: ResourceRecord) {
        self.add_record(Section::Answer, record)
    }

    /// Adds a record to the authority section.
    #[doc(alias = "add_authority")]
    pub fn add_server(&mut self, record: ResourceRecord) {
        self.add_record(Section::Authority, record)
    }

    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.add_record(Section::Additional, record)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> Vec<Arc<Question>> {
        self.questions.clone()
    }

    pub fn answers(&self) -> Vec<Arc<ResourceRecord>> {
        self.section(Section::Answer)
    }

    pub fn authorities(&self) -> Vec<Arc<ResourceRecord>> {
        self.section(Section::Authority)
    }

    pub fn additionals(&self) -> Vec<Arc<ResourceRecord>> {
        self.section(Section::Additional)
    }

    pub fn section(&self, section: Section) -> Vec<Arc<ResourceRecord>> {
        self.records(section).to_vec()
    }

    /// Answers, then additionals, then authorities, as they are at the time
    /// of the call.
    pub fn all_records(&self) -> impl Iterator<Item = Arc<ResourceRecord>> {
        self.answers()
            .into_iter()
            .chain(self.additionals())
            .chain(self.authorities())
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }

    pub fn answers_of_type(&self, type_: RecordType) -> Vec<Arc<ResourceRecord>> {
        self.answers
            .iter()
            .filter(|r| r.type_ == type_.to_int())
            .cloned()
            .collect()
    }

    pub fn has_error(&self) -> bool {
        self.header.response_code() != ResponseCode::NoError.to_int()
    }

    /// Text for the response code, empty when the response carries no error.
    pub fn error_message(&self) -> &'static str {
        if self.has_error() {
            error_text(self.header.response_code())
        } else {
            ""
        }
    }

    fn records(&self, section: Section) -> &[Arc<ResourceRecord>] {
        match section {
            Section::Answer => &self.answers,
            Section::Authority => &self.authorities,
            Section::Additional => &self.additionals,
        }
    }

    fn records_mut(&mut self, section: Section) -> &mut Vec<Arc<ResourceRecord>> {
        match section {
            Section::Answer => &mut self.answers,
            Section::Authority => &mut self.authorities,
            Section::Additional => &mut self.additionals,
        }
    }
}

impl Display for ResponseMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.header.response_code();
        let status = match ResponseCode::from_int(code) {
            Some(rcode) => rcode.to_string(),
            None => format!("RCODE{code}"),
        };

        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            self.header.opcode(),
            status,
            self.header.id
        )?;

        let flags = &self.header.flags;
        let set: Vec<&str> = [
            (flags.qr(), "qr"),
            (flags.aa(), "aa"),
            (flags.tc(), "tc"),
            (flags.rd(), "rd"),
            (flags.ra(), "ra"),
            (flags.ad(), "ad"),
            (flags.cd(), "cd"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        write!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            set.join(" "),
            self.questions.len(),
            self.answers.len(),
            self.authorities.len(),
            self.additionals.len()
        )?;

        if !self.questions.is_empty() {
            write!(f, "\n\n;; QUESTION SECTION:")?;
            for question in self.questions.iter() {
                write!(f, "\n;{question}")?;
            }
        }

        for (title, records) in [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additionals),
        ] {
            if records.is_empty() {
                continue;
            }

            write!(f, "\n\n;; {title} SECTION:")?;
            for record in records.iter() {
                write!(f, "\n{record}")?;
            }
        }

        Ok(())
    }
}
