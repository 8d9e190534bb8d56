use ude_core::{Charset, ProbingState, SURE_CONFIDENCE};

use crate::models::esc_sm::{HZ_MODEL, ISO2022CN_MODEL, ISO2022JP_MODEL, ISO2022KR_MODEL};
use crate::prober::Prober;
use crate::state_machine::{CodingStateMachine, Step};

/// Designator machines for the code-switching encodings, run in lockstep.
///
/// A completed designator is conclusive: ordinary text of another encoding
/// does not contain `ESC $ ) C` or a closed `~{ ~}` run.
#[derive(Debug, Clone)]
pub struct EscapeProber {
    machines: [CodingStateMachine; 4],
    retired: [bool; 4],
    active: usize,
    found: Option<Charset>,
    state: ProbingState,
}

impl Default for EscapeProber {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeProber {
    pub fn new() -> Self {
        Self {
            machines: [
                CodingStateMachine::new(&HZ_MODEL),
                CodingStateMachine::new(&ISO2022CN_MODEL),
                CodingStateMachine::new(&ISO2022JP_MODEL),
                CodingStateMachine::new(&ISO2022KR_MODEL),
            ],
            retired: [false; 4],
            active: 4,
            found: None,
            state: ProbingState::Detecting,
        }
    }
}

impl Prober for EscapeProber {
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for (sm, retired) in self.machines.iter_mut().zip(self.retired.iter_mut()) {
            if *retired {
                continue;
            }
            match sm.next(byte) {
                Step::Reject => {
                    *retired = true;
                    self.active -= 1;
                    tracing::trace!("{} retired on {:#04x}", sm.model().name, byte);
                    if self.active == 0 {
                        self.state = ProbingState::NotMe;
                        return self.state;
                    }
                }
                Step::Complete { .. } => {
                    let charset = sm.model().charset;
                    self.found = Some(charset);
                    self.state = ProbingState::FoundIt;
                    tracing::debug!("escape designator for {}", charset);
                    return self.state;
                }
                Step::Pending => {}
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.found.is_some() {
            SURE_CONFIDENCE
        } else {
            0.0
        }
    }

    fn charset(&self) -> Option<Charset> {
        self.found
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(bytes: &[u8]) -> EscapeProber {
        let mut p = EscapeProber::new();
        p.feed(bytes);
        p
    }

    #[test]
    fn iso2022_designators() {
        assert_eq!(probe(b"\x1b$B$3$s\x1b(B").charset(), Some(Charset::Iso2022Jp));
        assert_eq!(probe(b"\x1b$)C\x0e!!\x0f").charset(), Some(Charset::Iso2022Kr));
        assert_eq!(probe(b"\x1b$)A\x0e!!\x0f").charset(), Some(Charset::Iso2022Cn));
        assert_eq!(probe(b"\x1b$*H").charset(), Some(Charset::Iso2022Cn));
        assert_eq!(probe(b"\x1b$(D").charset(), Some(Charset::Iso2022Jp));
    }

    #[test]
    fn hz_needs_a_closed_even_run() {
        let p = probe(b"plain ~{<:Ky2;S{#,~} text");
        assert_eq!(p.charset(), Some(Charset::HzGb2312));
        assert_eq!(p.confidence(), 1.0);

        // Odd run length: the closing `~` is read as a trail byte.
        let p = probe(b"~{abc~}");
        assert_eq!(p.charset(), None);
    }

    #[test]
    fn literal_tilde_is_not_a_designator() {
        let p = probe(b"a ~~ b ~\nc");
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.charset(), None);
    }

    #[test]
    fn unknown_sequences_retire_every_machine() {
        // ESC x breaks the ISO-2022 machines, ~x breaks HZ.
        let p = probe(b"\x1bx ~x");
        assert_eq!(p.state(), ProbingState::NotMe);
        assert_eq!(p.confidence(), 0.0);
    }
}
