// =============================================================================
// Genotype syntax
// =============================================================================

/// Separator between the two allele tokens of a genotype
pub const ALLELE_SEPARATOR: char = '/';

/// Allele token meaning "no mutation at this locus"
pub const NORMAL_ALLELE: &str = "n";

/// Dominance ranks used only to order alleles for display.
///
/// Higher rank is written first. Unlisted alleles rank 0.
pub const DOMINANCE_RANKS: &[(&str, u8)] = &[
    ("A+", 6),
    ("A", 5),
    ("At", 4),
    ("a", 3),
    ("E", 2),
    ("e", 1),
    ("CR", 4),
    ("prl", 3),
    ("n", 1),
    ("Ch", 2),
    ("D", 2),
    ("Z", 2),
    ("Olw", 2),
    ("TO", 2),
    ("RN", 2),
    ("STY", 2),
    ("PG", 2),
    ("F", 2),
    ("f", 1),
];

// =============================================================================
// Base colors
// =============================================================================

pub const RED: &str = "Red";
pub const BLACK: &str = "Black";
pub const BAY: &str = "Bay";
pub const WILD_BAY: &str = "Wild Bay";
pub const SEAL_BAY: &str = "Seal Bay";

/// Recessive extension allele; `e/e` masks agouti entirely
pub const RED_EXTENSION_ALLELE: &str = "e";

/// Recessive agouti allele; `a/a` restricts nothing, leaving black
pub const BLACK_AGOUTI_ALLELE: &str = "a";

/// Substring marking the wild-type agouti allele (`A+`)
pub const WILD_AGOUTI_MARKER: char = '+';

/// Substring marking the seal-brown agouti allele (`At`)
pub const SEAL_AGOUTI_MARKER: char = 't';

// =============================================================================
// Dilutions
// =============================================================================

pub const CREAM_ALLELE: &str = "CR";
pub const PEARL_ALLELE: &str = "prl";

/// `CR/CR` and `CR/prl`
pub const DOUBLE_CREAM_TABLE: &[(&str, &str)] = &[
    (RED, "Cremello"),
    (BLACK, "Smoky Cream"),
    (BAY, "Perlino"),
    (WILD_BAY, "Perlino"),
    (SEAL_BAY, "Perlino"),
];

/// `CR/n`
pub const SINGLE_CREAM_TABLE: &[(&str, &str)] = &[
    (RED, "Palomino"),
    (BLACK, "Smoky Black"),
    (BAY, "Buckskin"),
    (WILD_BAY, "Wild Buckskin"),
    (SEAL_BAY, "Seal Buckskin"),
];

/// `prl/prl`; only red changes, other bases are recorded unchanged
pub const DOUBLE_PEARL_TABLE: &[(&str, &str)] = &[
    (RED, "Apricot Pearl"),
    (BLACK, BLACK),
    (BAY, BAY),
    (WILD_BAY, WILD_BAY),
    (SEAL_BAY, SEAL_BAY),
];

pub const CHAMPAGNE_TABLE: &[(&str, &str)] = &[
    (RED, "Gold Champagne"),
    ("Palomino", "Gold Champagne"),
    (BLACK, "Classic Champagne"),
    ("Smoky Black", "Classic Champagne"),
    (BAY, "Amber Champagne"),
    (WILD_BAY, "Sable Champagne"),
    (SEAL_BAY, "Amber Champagne"),
    ("Buckskin", "Amber Champagne"),
    ("Wild Buckskin", "Sable Champagne"),
    ("Seal Buckskin", "Amber Champagne"),
    ("Cremello", "Gold Cream Champagne"),
    ("Smoky Cream", "Classic Cream Champagne"),
    ("Perlino", "Amber Cream Champagne"),
];

pub const DUN_TABLE: &[(&str, &str)] = &[
    (RED, "Red Dun"),
    ("Palomino", "Dunalino"),
    (BLACK, "Grullo"),
    ("Smoky Black", "Grullo"),
    (BAY, "Bay Dun"),
    (WILD_BAY, "Wild Bay Dun"),
    (SEAL_BAY, "Seal Bay Dun"),
    ("Buckskin", "Dunskin"),
    ("Wild Buckskin", "Wild Dunskin"),
    ("Seal Buckskin", "Seal Dunskin"),
    ("Classic Champagne", "Classic Champagne Dun"),
    ("Gold Champagne", "Gold Champagne Dun"),
    ("Amber Champagne", "Amber Champagne Dun"),
    ("Sable Champagne", "Sable Champagne Dun"),
];

/// Appended to labels missing from [`DUN_TABLE`]
pub const DUN_SUFFIX: &str = " Dun";

/// Silver leaves these labels untouched (exact match)
pub const SILVER_EXEMPT_LABELS: &[&str] = &[
    RED,
    "Palomino",
    "Cremello",
    "Gold Champagne",
    "Red Dun",
    "Dunalino",
    "Gold Champagne Dun",
];

pub const SILVER_PREFIX: &str = "Silver";

// =============================================================================
// Patterns
// =============================================================================

pub const LETHAL_WHITE_ALLELE: &str = "Olw";
pub const TOBIANO_ALLELE: &str = "TO";
pub const ROAN_ALLELE: &str = "RN";

/// Terminal label for `Olw/Olw` foals
pub const LETHAL_WHITE_LABEL: &str = "Lethal White (Non-Viable)";

pub const TOBIANO_LABEL: &str = "Tobiano";
pub const OVERO_LABEL: &str = "Overo";
pub const ROAN_LABEL: &str = "Roan";

// =============================================================================
// Modifiers
// =============================================================================

pub const FLAXEN_ALLELE: &str = "f";
pub const SOOTY_ALLELE: &str = "STY";
pub const PANGARE_ALLELE: &str = "PG";

pub const FLAXEN_LABEL: &str = "Flaxen";
pub const SOOTY_LABEL: &str = "Sooty";
pub const PANGARE_LABEL: &str = "Pangare";

/// Flaxen applies when the label contains any of these (substring match)
pub const FLAXEN_RED_BASED_LABELS: &[&str] =
    &[RED, "Palomino", "Red Dun", "Dunalino", "Gold Champagne"];

/// Descriptive red-based set for visibility queries
pub const RED_BASED_LABELS: &[&str] = &[
    RED,
    "Palomino",
    "Cremello",
    "Gold Champagne",
    "Red Dun",
    "Dunalino",
];

/// Descriptive dark-color set for visibility queries
pub const DARK_LABELS: &[&str] = &[
    BLACK,
    SEAL_BAY,
    BAY,
    WILD_BAY,
    "Liver",
    "Dark Bay",
    "Classic Champagne",
    "Smoky Black",
    "Grullo",
];

// =============================================================================
// Engine
// =============================================================================

/// Crosses with fewer leaves than this are always derived sequentially
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Leaves per rayon work item
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;

/// Look up `label` in a two-column transition table
#[must_use]
pub fn lookup_label(table: &[(&'static str, &'static str)], label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == label)
        .map(|(_, to)| *to)
}
