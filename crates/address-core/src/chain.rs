//! Address families and their display conventions.

/// Chain whose addresses are being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Chain {
    /// Ethereum: checksummed hex addresses
    #[default]
    Eth,
    /// HTDF: Cosmos-style Bech32 account addresses
    Htdf,
    /// USDP: Cosmos-style Bech32 account addresses
    Usdp,
    /// HET: Bech32 account addresses under the `0x` prefix
    Het,
}

impl Chain {
    /// All supported chains.
    pub const ALL: [Chain; 4] = [Chain::Eth, Chain::Htdf, Chain::Usdp, Chain::Het];

    /// Get the Bech32 human-readable part, if this chain uses Bech32.
    pub fn bech32_hrp(&self) -> Option<&'static str> {
        match self {
            Chain::Eth => None,
            Chain::Htdf => Some("htdf"),
            Chain::Usdp => Some("usdp"),
            Chain::Het => Some("0x"),
        }
    }

    /// Whether addresses on this chain are Bech32 encoded.
    pub fn uses_bech32(&self) -> bool {
        self.bech32_hrp().is_some()
    }

    /// Parse chain from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eth" | "ethereum" => Some(Chain::Eth),
            "htdf" => Some(Chain::Htdf),
            "usdp" => Some(Chain::Usdp),
            "het" => Some(Chain::Het),
            _ => None,
        }
    }

    /// Get chain name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Eth => "eth",
            Chain::Htdf => "htdf",
            Chain::Usdp => "usdp",
            Chain::Het => "het",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Eth => "Ethereum",
            Chain::Htdf => "HTDF",
            Chain::Usdp => "USDP",
            Chain::Het => "HET",
        }
    }
}

impl core::fmt::Display for Chain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_hrp() {
        assert_eq!(Chain::Eth.bech32_hrp(), None);
        assert_eq!(Chain::Htdf.bech32_hrp(), Some("htdf"));
        assert_eq!(Chain::Usdp.bech32_hrp(), Some("usdp"));
        assert_eq!(Chain::Het.bech32_hrp(), Some("0x"));
        assert!(!Chain::Eth.uses_bech32());
        assert!(Chain::Htdf.uses_bech32());
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!(Chain::from_str("htdf"), Some(Chain::Htdf));
        assert_eq!(Chain::from_str("HTDF"), Some(Chain::Htdf));
        assert_eq!(Chain::from_str("ethereum"), Some(Chain::Eth));
        assert_eq!(Chain::from_str("invalid"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for chain in Chain::ALL {
            assert_eq!(Chain::from_str(chain.name()), Some(chain));
        }
        assert_eq!(Chain::default(), Chain::Eth);
    }
}
