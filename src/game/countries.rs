//! Static country lookups for the roster's nationalities.

use std::collections::HashMap;

use lazy_static::lazy_static;

pub const UNKNOWN_CONTINENT: &str = "Unknown";

lazy_static! {
    static ref COUNTRY_TO_CONTINENT: HashMap<&'static str, &'static str> = HashMap::from([
        ("Argentina", "South America"),
        ("Brazil", "South America"),
        ("Canada", "North America"),
        ("United States", "North America"),
        ("Dominican Republic", "North America"),
        ("China", "Asia"),
        ("Japan", "Asia"),
        ("Türkiye", "Europe"),
        ("France", "Europe"),
        ("Germany", "Europe"),
        ("Italy", "Europe"),
        ("Netherlands", "Europe"),
        ("Poland", "Europe"),
        ("Serbia", "Europe"),
        ("Slovenia", "Europe"),
        ("Egypt", "Africa"),
        ("Kenya", "Africa"),
    ]);

    static ref COUNTRY_TO_FLAG: HashMap<&'static str, &'static str> = HashMap::from([
        ("Argentina", "🇦🇷"),
        ("Brazil", "🇧🇷"),
        ("Canada", "🇨🇦"),
        ("China", "🇨🇳"),
        ("Dominican Republic", "🇩🇴"),
        ("Egypt", "🇪🇬"),
        ("France", "🇫🇷"),
        ("Germany", "🇩🇪"),
        ("Italy", "🇮🇹"),
        ("Japan", "🇯🇵"),
        ("Kenya", "🇰🇪"),
        ("Netherlands", "🇳🇱"),
        ("Poland", "🇵🇱"),
        ("Serbia", "🇷🇸"),
        ("Slovenia", "🇸🇮"),
        ("Türkiye", "🇹🇷"),
        ("United States", "🇺🇸"),
    ]);
}

/// Continent for a nationality, `"Unknown"` when the country isn't mapped.
pub fn continent_for(nationality: &str) -> &'static str {
    COUNTRY_TO_CONTINENT
        .get(nationality)
        .copied()
        .unwrap_or(UNKNOWN_CONTINENT)
}

/// Flag emoji for a nationality, empty when the country isn't mapped.
pub fn flag_for(nationality: &str) -> &'static str {
    COUNTRY_TO_FLAG.get(nationality).copied().unwrap_or("")
}
