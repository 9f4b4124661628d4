use std::sync::atomic::{AtomicBool, Ordering};

/// Sweep level "something changed" flag shared by all workers.
///
/// Workers can only raise it, so concurrent unsynchronized writes all
/// store the same value and no lock is needed.
/// Lowering it takes `&mut self`, which is only possible between
/// sweeps when no worker holds a reference,
/// so the flag never goes back to false mid sweep.
#[derive(Debug, Default)]
pub struct ChangeFlag {
    raised: AtomicBool,
}

impl ChangeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    pub fn reset(&mut self) {
        *self.raised.get_mut() = false;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn raise_and_reset() {
        let mut flag = ChangeFlag::new();
        assert!(!flag.is_raised());
        flag.raise();
        flag.raise();
        assert!(flag.is_raised());
        flag.reset();
        assert!(!flag.is_raised());
    }

    #[test]
    fn concurrent_raise() {
        let mut flag = ChangeFlag::new();
        for raisers in [0, 1, 8] {
            flag.reset();
            rayon::scope(|s| {
                for i in 0..8 {
                    let flag = &flag;
                    s.spawn(move |_| {
                        if i < raisers {
                            flag.raise();
                        }
                    });
                }
            });
            assert_eq!(flag.is_raised(), raisers > 0);
        }
    }
}
