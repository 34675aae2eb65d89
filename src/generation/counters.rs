//! Per kind statement counters

use crate::report::ParameterKind;

/// Independent counters for store and secret statements.
///
/// The value handed out for a kind is the index of the statement about to be
/// emitted for that kind, so index N is always the Nth statement of the kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCounters {
    store: usize,
    secret: usize,
}

impl KindCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the current value for `kind` and advance it
    pub fn next(&mut self, kind: ParameterKind) -> usize {
        let counter = self.counter_mut(kind);
        let index = *counter;
        *counter += 1;
        index
    }

    /// Number of indices handed out for `kind` so far
    pub fn count(&self, kind: ParameterKind) -> usize {
        match kind {
            ParameterKind::ParameterStore => self.store,
            ParameterKind::SecretsManager => self.secret,
        }
    }

    fn counter_mut(&mut self, kind: ParameterKind) -> &mut usize {
        match kind {
            ParameterKind::ParameterStore => &mut self.store,
            ParameterKind::SecretsManager => &mut self.secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = KindCounters::new();
        assert_eq!(counters.count(ParameterKind::ParameterStore), 0);
        assert_eq!(counters.count(ParameterKind::SecretsManager), 0);
    }

    #[test]
    fn test_counters_are_kind_local() {
        let mut counters = KindCounters::new();

        assert_eq!(counters.next(ParameterKind::SecretsManager), 0);
        assert_eq!(counters.next(ParameterKind::ParameterStore), 0);
        assert_eq!(counters.next(ParameterKind::SecretsManager), 1);
        assert_eq!(counters.next(ParameterKind::SecretsManager), 2);
        assert_eq!(counters.next(ParameterKind::ParameterStore), 1);

        assert_eq!(counters.count(ParameterKind::ParameterStore), 2);
        assert_eq!(counters.count(ParameterKind::SecretsManager), 3);
    }
}
