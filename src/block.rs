//! The persisting block: the chain context an execution is evaluated under.

/// The block whose persistence is the reason this execution is running (or a
/// synthesized tip+1 block, when the caller supplies none — see
/// [`crate::bootstrap`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PersistingBlock {
    /// Hash of the previous block.
    pub prev_hash: [u8; 32],
    /// Merkle root of this block's transactions.
    pub merkle_root: [u8; 32],
    /// Unix timestamp, in seconds.
    pub timestamp: u64,
    /// Height of this block.
    pub index: u32,
    /// Consensus-specific nonce.
    pub consensus_data: u64,
    /// Script hash of the next consensus committee.
    pub next_consensus: [u8; 20],
    /// Invocation witness script (empty for a synthesized block).
    pub witness_invocation: Vec<u8>,
    /// Verification witness script (empty for a synthesized block).
    pub witness_verification: Vec<u8>,
}

impl PersistingBlock {
    /// Synthesizes the tip+1 block described in the bootstrap entry points:
    /// `prev_hash`/`next_consensus` carried over from `tip`, `merkle_root`
    /// and `consensus_data` zeroed, an empty witness, no transactions, and a
    /// timestamp advanced by [`crate::constants::SECONDS_PER_BLOCK`].
    #[must_use]
    pub fn synthesize_next(tip_hash: [u8; 32], tip_timestamp: u64, tip_index: u32, next_consensus: [u8; 20]) -> Self {
        Self {
            prev_hash: tip_hash,
            merkle_root: [0u8; 32],
            timestamp: tip_timestamp + crate::constants::SECONDS_PER_BLOCK,
            index: tip_index + 1,
            consensus_data: 0,
            next_consensus,
            witness_invocation: Vec::new(),
            witness_verification: Vec::new(),
        }
    }
}
