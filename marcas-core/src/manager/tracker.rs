//! 在途请求计数

use std::collections::BTreeSet;

use crate::types::Ticket;

/// 在途请求追踪器
///
/// 每个发出的命令领取一张票据，收到回复时归还。只要还有票据未归还，
/// `is_busy()` 就为 true，因此先返回的请求不会把仍在进行的请求"清零"。
#[derive(Debug, Default)]
pub struct InFlightTracker {
    next: u64,
    outstanding: BTreeSet<Ticket>,
}

impl InFlightTracker {
    /// 领取新票据
    pub fn begin(&mut self) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.outstanding.insert(ticket);
        ticket
    }

    /// 归还票据；未知或重复的票据返回 false
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        self.outstanding.remove(&ticket)
    }

    pub fn is_busy(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.outstanding.len()
    }
}
