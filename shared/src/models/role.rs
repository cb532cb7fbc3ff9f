//! Role Model
//!
//! The backend hands back role strings in whatever shape the row was
//! seeded with: the canonical constant (`GENEL_MUDUR`), the Turkish
//! display label ("Genel Müdür"), or a diacritic-less variant typed by
//! hand. Everything funnels through [`normalize_role`] before any
//! allow-list check.

use serde::{Deserialize, Serialize};

/// Canonical application roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Operations manager
    #[serde(rename = "OPERASYON_MUDURU")]
    OperasyonMuduru,
    /// General manager
    #[serde(rename = "GENEL_MUDUR")]
    GenelMudur,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OperasyonMuduru => "OPERASYON_MUDURU",
            Self::GenelMudur => "GENEL_MUDUR",
        }
    }

    /// Parse an arbitrary role string through the normalizer.
    /// Unknown roles yield `None`, so guards fail closed.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_role(raw).as_str() {
            "OPERASYON_MUDURU" => Some(Self::OperasyonMuduru),
            "GENEL_MUDUR" => Some(Self::GenelMudur),
            _ => None,
        }
    }

    /// Route-guard check: exact membership in the allow-list.
    pub fn is_allowed(&self, allowed: &[Role]) -> bool {
        allowed.contains(self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical lookup table, display labels included
fn canon(s: &str) -> Option<&'static str> {
    match s {
        "Operasyon Müdürü" | "OPERASYON_MUDURU" => Some("OPERASYON_MUDURU"),
        "Genel Müdür" | "GENEL_MUDUR" => Some("GENEL_MUDUR"),
        _ => None,
    }
}

/// Strip Turkish-specific characters to ASCII equivalents
fn to_ascii_tr(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            'ı' | 'İ' => 'i',
            other => other,
        })
        .collect()
}

/// Map an arbitrary role string to a canonical token.
///
/// Direct lookup first; on miss, strip diacritics, collapse whitespace
/// runs to `_`, uppercase, and re-lookup. Still-unknown roles come back
/// transformed but unmapped, verbatim.
pub fn normalize_role(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Some(direct) = canon(raw) {
        return direct.to_string();
    }

    let transformed: String = to_ascii_tr(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase();
    match canon(&transformed) {
        Some(mapped) => mapped.to_string(),
        None => transformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_and_constant_normalize_alike() {
        assert_eq!(normalize_role("Genel Müdür"), "GENEL_MUDUR");
        assert_eq!(normalize_role("GENEL_MUDUR"), "GENEL_MUDUR");
        assert_eq!(normalize_role("genel mudur"), "GENEL_MUDUR");
        assert_eq!(normalize_role("Operasyon Müdürü"), "OPERASYON_MUDURU");
        assert_eq!(normalize_role("operasyon   muduru"), "OPERASYON_MUDURU");
    }

    #[test]
    fn unknown_role_passes_through_transformed() {
        assert_eq!(normalize_role("Süper Admin"), "SUPER_ADMIN");
        assert_eq!(normalize_role(""), "");
    }

    #[test]
    fn parse_fails_closed_on_unknown() {
        assert_eq!(Role::parse("Genel Müdür"), Some(Role::GenelMudur));
        assert_eq!(Role::parse("muhasebe"), None);
    }

    #[test]
    fn allow_list_membership() {
        let both = [Role::OperasyonMuduru, Role::GenelMudur];
        assert!(Role::GenelMudur.is_allowed(&both));
        assert!(!Role::OperasyonMuduru.is_allowed(&[Role::GenelMudur]));
    }

    #[test]
    fn wire_format_is_canonical_token() {
        assert_eq!(
            serde_json::to_string(&Role::GenelMudur).unwrap(),
            "\"GENEL_MUDUR\""
        );
    }
}
