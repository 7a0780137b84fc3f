// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 alpha-2 region names used to describe specific cultures.

/// English name of a region code (uppercase, `AT`).
pub fn region_name(code: &str) -> Option<&'static str> {
    match code {
        "US" => Some("United States"),
        "GB" => Some("United Kingdom"),
        "AU" => Some("Australia"),
        "CA" => Some("Canada"),
        "IE" => Some("Ireland"),
        "NZ" => Some("New Zealand"),
        "IN" => Some("India"),
        "DE" => Some("Germany"),
        "AT" => Some("Austria"),
        "CH" => Some("Switzerland"),
        "LI" => Some("Liechtenstein"),
        "LU" => Some("Luxembourg"),
        "FR" => Some("France"),
        "BE" => Some("Belgium"),
        "ES" => Some("Spain"),
        "MX" => Some("Mexico"),
        "AR" => Some("Argentina"),
        "IT" => Some("Italy"),
        "PT" => Some("Portugal"),
        "BR" => Some("Brazil"),
        "NL" => Some("Netherlands"),
        "JP" => Some("Japan"),
        "CN" => Some("China"),
        "TW" => Some("Taiwan"),
        "KR" => Some("Korea"),
        "RU" => Some("Russia"),
        "PL" => Some("Poland"),
        "SE" => Some("Sweden"),
        "DK" => Some("Denmark"),
        "FI" => Some("Finland"),
        "CZ" => Some("Czechia"),
        "TR" => Some("Türkiye"),
        "GR" => Some("Greece"),
        "HU" => Some("Hungary"),
        "NO" => Some("Norway"),
        "UA" => Some("Ukraine"),
        _ => None,
    }
}
