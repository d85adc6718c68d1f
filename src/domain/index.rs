//! Lookup from streamed asset id to watch-list position.

use std::collections::HashMap;

use tracing::warn;

use super::{ResolvedMarket, TokenId};

/// Maps each watched outcome token to the position of its instrument.
///
/// Built once from the resolved markets before streaming starts and only
/// read afterwards. Only the primary token of each market is indexed, since
/// that is the only token the session subscribes to. Primary tokens are
/// expected to be distinct; if one repeats, the first position keeps it.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    positions: HashMap<TokenId, usize>,
    tokens: Vec<TokenId>,
}

impl AssetIndex {
    /// Build the index; `markets[i]` belongs to watched instrument `i`.
    #[must_use]
    pub fn from_markets(markets: &[ResolvedMarket]) -> Self {
        let mut index = Self::default();

        for (position, market) in markets.iter().enumerate() {
            let token = market.primary_token().clone();
            if let Some(existing) = index.positions.get(&token) {
                warn!(
                    token = %token,
                    first = existing,
                    duplicate = position,
                    "Outcome token shared by two instruments, keeping the first"
                );
                continue;
            }
            index.positions.insert(token.clone(), position);
            index.tokens.push(token);
        }

        index
    }

    /// Position of the instrument owning `token`, if it is watched.
    #[must_use]
    pub fn position(&self, token: &TokenId) -> Option<usize> {
        self.positions.get(token).copied()
    }

    /// Tokens to subscribe to, in watch-list order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
