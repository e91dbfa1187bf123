use crate::prelude::*;

/// Index of the instance that `sender_index` sends to: the next one in pool
/// order, wrapping around so that the last instance sends to the first.
///
/// # Panics
/// Panics if `number_of_instances` is zero.
pub fn receiver_index(sender_index: usize, number_of_instances: usize) -> usize {
    (sender_index + 1) % number_of_instances
}

/// Immutable, index-addressed set of wallets shared by all instances.
#[derive(Debug, Clone, PartialEq, Eq, AsRef)]
pub struct WalletPool(Vec<KeyPair>);

impl WalletPool {
    pub(crate) fn new(key_pairs: Vec<KeyPair>) -> Result<Self, WalletPoolError> {
        if key_pairs.is_empty() {
            return Err(WalletPoolError::Empty);
        }
        Ok(Self(key_pairs))
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&KeyPair> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyPair> {
        self.0.iter()
    }

    /// The `(sender, receiver)` wallets used by instance `sender_index`.
    pub fn pair_for(&self, sender_index: usize) -> Option<(&KeyPair, &KeyPair)> {
        let sender = self.get(sender_index)?;
        let receiver = self.get(receiver_index(sender_index, self.len()))?;
        Some((sender, receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_wraps_around() {
        assert_eq!(receiver_index(0, 3), 1);
        assert_eq!(receiver_index(1, 3), 2);
        assert_eq!(receiver_index(2, 3), 0);
    }

    #[test]
    fn single_instance_sends_to_itself() {
        assert_eq!(receiver_index(0, 1), 0);
    }

    #[test]
    fn every_instance_is_received_from_exactly_once() {
        for n in 1..=16 {
            let mut receivers = (0..n)
                .map(|i| receiver_index(i, n))
                .collect::<Vec<_>>();
            receivers.sort_unstable();
            assert_eq!(receivers, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            WalletPool::new(Vec::new()),
            Err(WalletPoolError::Empty)
        ));
    }
}
