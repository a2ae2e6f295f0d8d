#![forbid(unsafe_code)]

//! Chain identifiers and the UI registry keyed by them.
//!
//! The registry is the only source of per-network presentation data. Lookups
//! are total: an id the registry does not know resolves to
//! [`ChainRegistry::fallback`], so callers always get a descriptor to render.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use ahash::AHashMap;

/// EIP-155 chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChainId(pub u64);

impl ChainId {
    /// Placeholder id carried by the fallback descriptor.
    pub const UNKNOWN: ChainId = ChainId(0);
    pub const ETHEREUM: ChainId = ChainId(1);
    pub const OPTIMISM: ChainId = ChainId(10);
    pub const POLYGON: ChainId = ChainId(137);
    pub const MEGAETH_TESTNET: ChainId = ChainId(6342);
    pub const BASE: ChainId = ChainId(8453);
    pub const MONAD_TESTNET: ChainId = ChainId(10143);
    pub const ARBITRUM_ONE: ChainId = ChainId(42161);
    pub const BASE_SEPOLIA: ChainId = ChainId(84532);
    pub const SEPOLIA: ChainId = ChainId(11155111);
    pub const RISE_TESTNET: ChainId = ChainId(11155931);

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation metadata for one network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainDescriptor {
    pub id: ChainId,
    pub display_name: Cow<'static, str>,
    /// `#RRGGBB` accent; not validated here, theme derivation falls back.
    pub accent_hex: Cow<'static, str>,
}

impl ChainDescriptor {
    pub const fn new_static(
        id: ChainId,
        display_name: &'static str,
        accent_hex: &'static str,
    ) -> Self {
        Self {
            id,
            display_name: Cow::Borrowed(display_name),
            accent_hex: Cow::Borrowed(accent_hex),
        }
    }

    pub fn new(
        id: ChainId,
        display_name: impl Into<Cow<'static, str>>,
        accent_hex: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            accent_hex: accent_hex.into(),
        }
    }
}

/// Descriptor used for every id the registry does not know.
pub const FALLBACK_CHAIN: ChainDescriptor =
    ChainDescriptor::new_static(ChainId::UNKNOWN, "Unknown Network", "#10B981");

/// Networks offered by the benchmark selector, in selector order.
pub const BUILTIN_CHAINS: [ChainDescriptor; 10] = [
    ChainDescriptor::new_static(ChainId::ETHEREUM, "Ethereum", "#627EEA"),
    ChainDescriptor::new_static(ChainId::SEPOLIA, "Sepolia", "#CFB5F0"),
    ChainDescriptor::new_static(ChainId::BASE, "Base", "#0052FF"),
    ChainDescriptor::new_static(ChainId::BASE_SEPOLIA, "Base Sepolia", "#3C8AFF"),
    ChainDescriptor::new_static(ChainId::OPTIMISM, "OP Mainnet", "#FF0420"),
    ChainDescriptor::new_static(ChainId::ARBITRUM_ONE, "Arbitrum One", "#28A0F0"),
    ChainDescriptor::new_static(ChainId::POLYGON, "Polygon", "#8247E5"),
    ChainDescriptor::new_static(ChainId::MONAD_TESTNET, "Monad Testnet", "#836EF9"),
    ChainDescriptor::new_static(ChainId::MEGAETH_TESTNET, "MegaETH Testnet", "#F2F2F2"),
    ChainDescriptor::new_static(ChainId::RISE_TESTNET, "RISE Testnet", "#7967E5"),
];

/// Lookup table from [`ChainId`] to [`ChainDescriptor`].
///
/// Iteration follows insertion order; replacing a descriptor keeps its slot.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<ChainDescriptor>,
    index: AHashMap<ChainId, usize>,
    fallback: ChainDescriptor,
}

impl ChainRegistry {
    /// Registry with no chains; every lookup resolves to the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            chains: Vec::new(),
            index: AHashMap::new(),
            fallback: FALLBACK_CHAIN,
        }
    }

    /// Registry pre-populated with [`BUILTIN_CHAINS`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for chain in BUILTIN_CHAINS {
            registry.insert(chain);
        }
        registry
    }

    /// Add or replace a descriptor. Returns the replaced one, if any.
    pub fn insert(&mut self, descriptor: ChainDescriptor) -> Option<ChainDescriptor> {
        match self.index.get(&descriptor.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.chains[slot], descriptor)),
            None => {
                self.index.insert(descriptor.id, self.chains.len());
                self.chains.push(descriptor);
                None
            }
        }
    }

    #[must_use]
    pub fn with_chain(mut self, descriptor: ChainDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Replace the descriptor returned for unknown ids.
    #[must_use]
    pub fn with_fallback(mut self, fallback: ChainDescriptor) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn get(&self, id: ChainId) -> Option<&ChainDescriptor> {
        self.index.get(&id).map(|&slot| &self.chains[slot])
    }

    /// Descriptor for `id`, or the fallback when `id` is not registered.
    pub fn get_chain_ui(&self, id: ChainId) -> &ChainDescriptor {
        match self.get(id) {
            Some(descriptor) => descriptor,
            None => {
                tracing::debug!(chain_id = id.get(), "unknown chain, using fallback descriptor");
                &self.fallback
            }
        }
    }

    pub fn contains(&self, id: ChainId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn fallback(&self) -> &ChainDescriptor {
        &self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainDescriptor> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<ChainDescriptor> for ChainRegistry {
    fn from_iter<I: IntoIterator<Item = ChainDescriptor>>(iter: I) -> Self {
        let mut registry = Self::empty();
        for descriptor in iter {
            registry.insert(descriptor);
        }
        registry
    }
}

/// Shared built-in registry.
pub fn builtin_registry() -> &'static ChainRegistry {
    static BUILTIN: OnceLock<ChainRegistry> = OnceLock::new();
    BUILTIN.get_or_init(ChainRegistry::builtin)
}

/// Look up `id` in the built-in registry.
pub fn get_chain_ui(id: ChainId) -> &'static ChainDescriptor {
    builtin_registry().get_chain_ui(id)
}
