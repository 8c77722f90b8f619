//! 제안 툴팁 상태
//!
//! 한 번에 하나의 제안만 표시하며, 일정 시간이 지나면 자동으로 사라집니다.

use std::time::{Duration, Instant};

use crate::platform::{replace_last_word, EditableSurface};
use crate::policy::Proposal;

pub const DEFAULT_SUGGESTION_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
struct Shown {
    proposal: Proposal,
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct SuggestionSlot {
    current: Option<Shown>,
    timeout: Duration,
}

impl SuggestionSlot {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    /// 제안 표시 (이전 제안은 교체됨)
    pub fn show(&mut self, proposal: Proposal) {
        self.show_at(proposal, Instant::now());
    }

    fn show_at(&mut self, proposal: Proposal, shown_at: Instant) {
        self.current = Some(Shown { proposal, shown_at });
    }

    /// 만료되지 않은 현재 제안
    pub fn active(&mut self) -> Option<&Proposal> {
        self.active_at(Instant::now())
    }

    fn active_at(&mut self, now: Instant) -> Option<&Proposal> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|s| now.duration_since(s.shown_at) >= self.timeout);
        if expired {
            self.current = None;
        }
        self.current.as_ref().map(|s| &s.proposal)
    }

    /// 적용하지 않고 닫음
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// 툴팁 문구
    pub fn label(proposal: &Proposal) -> String {
        format!("Did you mean \"{}\"?", proposal.converted)
    }

    /// 현재 제안을 입력 영역에 적용하고 닫음
    pub fn accept<S>(&mut self, surface: &mut S) -> bool
    where
        S: EditableSurface + ?Sized,
    {
        let Some(proposal) = self.active().cloned() else {
            return false;
        };
        self.current = None;
        replace_last_word(surface, &proposal.original, &proposal.converted)
    }
}

impl Default for SuggestionSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUGGESTION_TIMEOUT_MS))
    }
}
