//! Last live status received from the poller.

use crate::models::StatusSnapshot;

/// Live detection panel state. Each snapshot replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveStatus {
    snapshot: Option<StatusSnapshot>,
    updates: u64,
}

impl LiveStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed snapshot. Returns whether it reports `verified`.
    pub fn apply(&mut self, snapshot: StatusSnapshot) -> bool {
        let verified = snapshot.verified;
        self.snapshot = Some(snapshot);
        self.updates += 1;
        verified
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    /// Number of snapshots applied this session.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_snapshot() {
        let mut live = LiveStatus::new();
        assert!(live.snapshot().is_none());

        let verified = live.apply(StatusSnapshot {
            status: "Holding".to_string(),
            ..Default::default()
        });
        assert!(!verified);

        let verified = live.apply(StatusSnapshot {
            status: "VERIFIED".to_string(),
            verified: true,
            ..Default::default()
        });
        assert!(verified);
        assert_eq!(live.snapshot().unwrap().status, "VERIFIED");
        assert_eq!(live.updates(), 2);
    }
}
