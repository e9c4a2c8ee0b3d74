/// Orders overlapping poll completions.
///
/// Polls are not pipelined: a slow fetch keeps running while later ticks fire,
/// so two in-flight polls can resolve in either order. Each poll takes a
/// sequence number from [`begin`](PollGate::begin) and its completion is only
/// applied if [`admit`](PollGate::admit) accepts it; a completion older than
/// the newest one already applied is discarded instead of rolling the view
/// back.
#[derive(Debug, Default)]
pub struct PollGate {
    next_seq: u64,
    last_applied: Option<u64>,
}

impl PollGate {
    pub fn new() -> Self {
        Default::default()
    }

    /// Tags a new poll, returning its sequence number.
    pub fn begin(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Whether a completed poll may be applied. Accepting records it as the
    /// newest applied poll.
    pub fn admit(&mut self, seq: u64) -> bool {
        match self.last_applied {
            Some(last) if seq <= last => false,
            _ => {
                self.last_applied = Some(seq);
                true
            }
        }
    }
}

#[test]
fn in_order_polls_test() {
    let mut gate = PollGate::new();
    let a = gate.begin();
    let b = gate.begin();
    assert!(gate.admit(a));
    assert!(gate.admit(b));
}

#[test]
fn out_of_order_polls_test() {
    let mut gate = PollGate::new();
    let a = gate.begin();
    let b = gate.begin();
    assert!(gate.admit(b));
    assert!(!gate.admit(a));
}

#[test]
fn duplicate_completion_test() {
    let mut gate = PollGate::new();
    let a = gate.begin();
    assert!(gate.admit(a));
    assert!(!gate.admit(a));
}
