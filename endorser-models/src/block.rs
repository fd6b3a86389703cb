//! Upstream chain block identification.

use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

/// Height of a block on the upstream chain.
pub type BlockHeight = u64;

/// Size in bytes of an upstream block hash.
pub const BLOCK_HASH_SIZE_BYTES: usize = 32;

/// Block hash, displayed and parsed as 64 lowercase hex characters in RPC byte order.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct BlockHash([u8; BLOCK_HASH_SIZE_BYTES]);

impl BlockHash {
    /// Builds a hash from its raw bytes.
    pub const fn from_bytes(bytes: [u8; BLOCK_HASH_SIZE_BYTES]) -> Self {
        BlockHash(bytes)
    }

    /// Raw bytes of the hash.
    pub fn to_bytes(&self) -> &[u8; BLOCK_HASH_SIZE_BYTES] {
        &self.0
    }
}

impl std::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for BlockHash {
    type Err = ModelsError;

    /// ## Example
    /// ```rust
    /// # use std::str::FromStr;
    /// # use endorser_models::block::BlockHash;
    /// let s = "00000000000000000001a0d63fa4f4d1aeca2db7d1fcdb53f9ea1c2f5e4b8a0c";
    /// let hash = BlockHash::from_str(s).unwrap();
    /// assert_eq!(hash.to_string(), s);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; BLOCK_HASH_SIZE_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| ModelsError::BlockHashParseError(format!("{}: {}", s, e)))?;
        Ok(BlockHash(bytes))
    }
}

/// One block of the upstream chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRef {
    /// block height
    pub height: BlockHeight,
    /// block hash at that height
    pub hash: BlockHash,
}

impl std::fmt::Display for BlockRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.hash, self.height)
    }
}
