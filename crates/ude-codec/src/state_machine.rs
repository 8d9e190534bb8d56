use ude_core::{Charset, UdeError};
use ude_dsa::{BitTable, TableError};

pub const START: u8 = 0;
pub const ERROR: u8 = 1;
pub const ITS_ME: u8 = 2;

/// Static description of one byte-sequence grammar.
///
/// ## Mechanical Sympathy: Two Lookups per Byte
/// A byte is first reduced to its class, then `(state, class)` selects the
/// next state. Both tables are nibble-packed so a whole grammar fits in a
/// few cache lines.
#[derive(Debug)]
pub struct CodingModel {
    pub name: &'static str,
    pub charset: Charset,
    pub class_table: BitTable,
    pub class_count: u8,
    pub state_table: BitTable,
    pub state_count: u8,
}

impl CodingModel {
    /// Checks that every class and every next state is in range.
    pub fn validate(&self) -> Result<(), UdeError> {
        if self.class_table.len() != 256 {
            return Err(UdeError::table(
                self.name,
                TableError::Truncated { len: 256, capacity: self.class_table.len() },
            ));
        }
        self.class_table
            .validate(self.class_count.saturating_sub(1))
            .map_err(|e| UdeError::table(self.name, e))?;
        let cells = self.state_count as usize * self.class_count as usize;
        if self.state_table.len() != cells {
            return Err(UdeError::table(
                self.name,
                TableError::Truncated { len: cells, capacity: self.state_table.len() },
            ));
        }
        self.state_table
            .validate(self.state_count.saturating_sub(1))
            .map_err(|e| UdeError::table(self.name, e))
    }

    #[inline(always)]
    fn next(&self, state: u8, byte: u8) -> u8 {
        let class = self.class_table.unpack(byte as usize);
        self.state_table
            .unpack(state as usize * self.class_count as usize + class as usize)
    }
}

/// Result of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More bytes are needed, or the byte was ordinary text for a
    /// designator machine.
    Pending,
    /// A character (or designator) of `len` bytes starting with `lead` ended
    /// on this byte. The machine is back at `START`.
    Complete { lead: u8, len: u8 },
    /// The grammar can never match this stream.
    Reject,
}

/// Running position inside a `CodingModel`.
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static CodingModel,
    state: u8,
    lead: u8,
    len: u8,
}

impl CodingStateMachine {
    pub fn new(model: &'static CodingModel) -> Self {
        Self {
            model,
            state: START,
            lead: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn next(&mut self, byte: u8) -> Step {
        if self.state == START {
            self.lead = byte;
            self.len = 0;
        }
        self.state = self.model.next(self.state, byte);
        self.len = self.len.saturating_add(1);
        match self.state {
            ERROR => Step::Reject,
            ITS_ME => {
                self.state = START;
                Step::Complete { lead: self.lead, len: self.len }
            }
            _ => Step::Pending,
        }
    }

    pub fn model(&self) -> &'static CodingModel {
        self.model
    }

    pub fn reset(&mut self) {
        self.state = START;
        self.lead = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mbcs_sm::{EUCTW_MODEL, GB18030_MODEL, SJIS_MODEL, UTF8_MODEL};

    fn run(model: &'static CodingModel, bytes: &[u8]) -> Vec<Step> {
        let mut sm = CodingStateMachine::new(model);
        bytes.iter().map(|&b| sm.next(b)).collect()
    }

    #[test]
    fn utf8_reports_char_lengths() {
        let steps = run(&UTF8_MODEL, "aЖ語😀".as_bytes());
        let lens: Vec<u8> = steps
            .iter()
            .filter_map(|s| match s {
                Step::Complete { len, .. } => Some(*len),
                _ => None,
            })
            .collect();
        assert_eq!(lens, vec![1, 2, 3, 4]);
    }

    #[test]
    fn utf8_rejects_overlong_and_surrogates() {
        assert_eq!(run(&UTF8_MODEL, &[0xC0, 0x80]).last(), Some(&Step::Reject));
        assert_eq!(run(&UTF8_MODEL, &[0xE0, 0x80]).last(), Some(&Step::Reject));
        assert_eq!(run(&UTF8_MODEL, &[0xED, 0xA0]).last(), Some(&Step::Reject));
        assert_eq!(run(&UTF8_MODEL, &[0xF4, 0x90]).last(), Some(&Step::Reject));
    }

    #[test]
    fn truncated_sequence_is_pending_not_reject() {
        let mut sm = CodingStateMachine::new(&UTF8_MODEL);
        assert_eq!(sm.next(0xE8), Step::Pending);
        assert_eq!(sm.next(0xAA), Step::Pending);
        // A truncated character is an intermediate state, not an error.
        assert_ne!(sm.state, ERROR);
        assert_ne!(sm.state, START);
    }

    #[test]
    fn sjis_kana_is_single_byte() {
        let steps = run(&SJIS_MODEL, &[0xB1, 0x82, 0xA0]);
        assert_eq!(steps[0], Step::Complete { lead: 0xB1, len: 1 });
        assert_eq!(steps[2], Step::Complete { lead: 0x82, len: 2 });
    }

    #[test]
    fn gb18030_four_byte_form() {
        let steps = run(&GB18030_MODEL, &[0x81, 0x30, 0x81, 0x30]);
        assert_eq!(steps[3], Step::Complete { lead: 0x81, len: 4 });
        assert_eq!(run(&GB18030_MODEL, &[0x81, 0x30, 0x30]).last(), Some(&Step::Reject));
    }

    #[test]
    fn euctw_plane_prefix() {
        let steps = run(&EUCTW_MODEL, &[0x8E, 0xA2, 0xC4, 0xA1]);
        assert_eq!(steps[3], Step::Complete { lead: 0x8E, len: 4 });
        assert_eq!(run(&EUCTW_MODEL, &[0x8E, 0xB1]).last(), Some(&Step::Reject));
    }
}
