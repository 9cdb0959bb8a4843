//! Static legal knowledge tables.
//!
//! Pure data: topic entries for the consultation tool and keyword flag
//! rules for the document analyzer. No state, no I/O; lookups are plain
//! substring scans over lowercased input.

/// Case-insensitive scan: does `haystack` (already lowercased) contain any
/// of the given needles?
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// ============================================================================
// Consultation topics
// ============================================================================

/// Query keywords that select the employment bond topic.
pub const EMPLOYMENT_BOND_KEYWORDS: &[&str] =
    &["employment bond", "bond", "bond break", "training bond"];

/// Query keywords that select the POSH Act topic.
pub const POSH_KEYWORDS: &[&str] = &["posh", "sexual harassment", "workplace harassment"];

/// Query keywords that select the consumer rights topic.
pub const CONSUMER_KEYWORDS: &[&str] = &["consumer", "defective product", "refund", "warranty"];

/// Employment bond topic entry.
pub struct EmploymentBondInfo {
    pub description: &'static str,
    pub breaking_consequences: &'static [&'static str],
    pub defenses: &'static [&'static str],
    pub relevant_laws: &'static [&'static str],
}

pub static EMPLOYMENT_BOND: EmploymentBondInfo = EmploymentBondInfo {
    description:
        "Employment bonds are agreements where employees commit to work for a specified period",
    breaking_consequences: &[
        "Potential monetary penalty as specified in the bond",
        "Legal action for breach of contract",
        "Recovery of training costs and other expenses",
        "Possible impact on future employment references",
    ],
    defenses: &[
        "Unreasonable restraint of trade (if bond terms are excessive)",
        "Lack of consideration (if no benefits provided during training)",
        "Unconscionable terms (if penalty is disproportionate)",
        "Misrepresentation or fraud in bond execution",
    ],
    relevant_laws: &["Indian Contract Act 1872", "Industrial Disputes Act 1947"],
};

/// POSH Act topic entry.
pub struct PoshActInfo {
    pub description: &'static str,
    pub if_accused: &'static [&'static str],
    pub if_victim: &'static [&'static str],
    pub employer_duties: &'static [&'static str],
    pub relevant_laws: &'static [&'static str],
}

pub static POSH_ACT: PoshActInfo = PoshActInfo {
    description: "Prevention of Sexual Harassment (POSH) Act 2013 protects women at workplace",
    if_accused: &[
        "Right to fair hearing and due process",
        "Right to legal representation",
        "Presumption of innocence until proven guilty",
        "Protection against false/malicious complaints",
        "Right to cross-examine witnesses",
    ],
    if_victim: &[
        "Right to file complaint with Internal Committee (IC) or Local Committee (LC)",
        "Right to interim relief during inquiry",
        "Right to confidentiality and privacy",
        "Protection against victimization",
        "Right to compensation if harassment is proved",
    ],
    employer_duties: &[
        "Constitute Internal Committee",
        "Conduct fair and time-bound inquiry",
        "Provide safe working environment",
        "Take action based on IC recommendations",
    ],
    relevant_laws: &[
        "Sexual Harassment of Women at Workplace (Prevention, Prohibition and Redressal) Act, 2013",
    ],
};

/// Consumer rights topic entry.
pub struct ConsumerRightsInfo {
    pub description: &'static str,
    pub rights: &'static [&'static str],
    pub remedies: &'static [&'static str],
    pub relevant_laws: &'static [&'static str],
}

pub static CONSUMER_RIGHTS: ConsumerRightsInfo = ConsumerRightsInfo {
    description: "Consumer Protection Act 2019 provides comprehensive protection to consumers",
    rights: &[
        "Right to safety from hazardous goods/services",
        "Right to be informed about quality, quantity, price",
        "Right to choose from variety of goods/services",
        "Right to be heard in consumer forums",
        "Right to seek redressal against unfair trade practices",
        "Right to consumer education",
    ],
    remedies: &[
        "Replacement or repair of defective goods",
        "Refund of amount paid",
        "Compensation for loss/injury",
        "Discontinuation of unfair trade practice",
    ],
    relevant_laws: &["Consumer Protection Act 2019"],
};

// ============================================================================
// Document flag rules
// ============================================================================

/// How serious a triggered flag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Critical issue - likely enforceability or compliance problem.
    Critical,
    /// Area of concern - missing or unclear provision.
    Caution,
}

/// A keyword rule over lowercased document text.
///
/// Fires when the document matches the category, contains any `any_of`
/// keyword (if given), and contains none of the `missing` keywords.
pub struct FlagRule {
    /// Keywords identifying the document category this rule applies to.
    pub category: &'static [&'static str],

    /// Keywords whose presence triggers the rule (empty = no requirement).
    pub any_of: &'static [&'static str],

    /// Keywords whose absence triggers the rule (empty = no requirement).
    pub missing: &'static [&'static str],

    pub severity: Severity,
    pub message: &'static str,
}

const EMPLOYMENT_CATEGORY: &[&str] = &["bond", "training", "service period", "employment"];
const CONTRACT_CATEGORY: &[&str] = &["contract", "agreement", "terms"];
const PROPERTY_CATEGORY: &[&str] = &["property", "lease", "rent", "premises"];
const NDA_CATEGORY: &[&str] = &["confidential", "non-disclosure", "proprietary"];

pub static FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        category: EMPLOYMENT_CATEGORY,
        any_of: &["penalty", "damages"],
        missing: &[],
        severity: Severity::Critical,
        message: "Contains penalty clauses - verify if proportionate to actual losses",
    },
    FlagRule {
        category: EMPLOYMENT_CATEGORY,
        any_of: &["restraint", "non-compete"],
        missing: &[],
        severity: Severity::Critical,
        message: "Contains restraint of trade clauses - may be unenforceable if unreasonable",
    },
    FlagRule {
        category: EMPLOYMENT_CATEGORY,
        any_of: &[],
        missing: &["consideration"],
        severity: Severity::Caution,
        message: "No clear mention of consideration - check if adequate benefits are provided",
    },
    FlagRule {
        category: CONTRACT_CATEGORY,
        any_of: &[],
        missing: &["jurisdiction"],
        severity: Severity::Caution,
        message: "No jurisdiction clause mentioned - disputes may face forum issues",
    },
    FlagRule {
        category: CONTRACT_CATEGORY,
        any_of: &[],
        missing: &["termination"],
        severity: Severity::Caution,
        message: "No clear termination clause - check exit provisions",
    },
    FlagRule {
        category: CONTRACT_CATEGORY,
        any_of: &[],
        missing: &["force majeure"],
        severity: Severity::Caution,
        message: "No force majeure clause - may lack protection in unforeseen circumstances",
    },
    FlagRule {
        category: PROPERTY_CATEGORY,
        any_of: &["lease"],
        missing: &["registration"],
        severity: Severity::Critical,
        message: "Lease agreement may require registration if rent exceeds Rs 100 per month",
    },
    FlagRule {
        category: PROPERTY_CATEGORY,
        any_of: &[],
        missing: &["maintenance"],
        severity: Severity::Caution,
        message: "Maintenance responsibilities not clearly defined",
    },
    FlagRule {
        category: NDA_CATEGORY,
        any_of: &[],
        missing: &["duration"],
        severity: Severity::Caution,
        message: "No clear duration for confidentiality obligations",
    },
    FlagRule {
        category: NDA_CATEGORY,
        any_of: &[],
        missing: &["return of materials"],
        severity: Severity::Caution,
        message: "No clause for return of confidential materials",
    },
];

/// Evaluate all flag rules against lowercased document text.
///
/// Returns (critical issues, areas of concern) in rule order.
pub fn evaluate_flags(content_lower: &str) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut critical = Vec::new();
    let mut caution = Vec::new();

    for rule in FLAG_RULES {
        if !contains_any(content_lower, rule.category) {
            continue;
        }
        if !rule.any_of.is_empty() && !contains_any(content_lower, rule.any_of) {
            continue;
        }
        if !rule.missing.is_empty() && contains_any(content_lower, rule.missing) {
            continue;
        }
        match rule.severity {
            Severity::Critical => critical.push(rule.message),
            Severity::Caution => caution.push(rule.message),
        }
    }

    (critical, caution)
}
