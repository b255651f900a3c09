/// Region registry for the PSI breakdown.
///
/// The PSI feed reports readings under five fixed region keys. This is
/// the single source of truth for those keys — the aggregator and the
/// PSI endpoint iterate this registry rather than hardcoding keys, so
/// a region missing from an upstream payload still appears in the
/// response (with the documented default of 0).

/// One PSI reporting region.
pub struct Region {
    /// Key used in the feed's readings maps (lowercase).
    pub key: &'static str,
    /// Display name used in responses.
    pub display: &'static str,
}

/// The five PSI regions, in the feed's documented order.
pub static REGION_REGISTRY: &[Region] = &[
    Region { key: "north", display: "North" },
    Region { key: "south", display: "South" },
    Region { key: "east", display: "East" },
    Region { key: "west", display: "West" },
    Region { key: "central", display: "Central" },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
