//! Employee-count bands and their ordinals.
//!
//! Listings record their head count as a band tag such as `"51-200"` rather
//! than a number. Sorting by size needs a numeric magnitude for each tag, which
//! this module provides through a fixed lookup table.

/// Band tags and the magnitude each one sorts by.
///
/// Several bands have two spellings (`"51-200"` and `"50-200"`); both map to
/// the same ordinal.
pub const EMPLOYEE_BANDS: &[(&str, u32)] = &[
    ("1-10", 5),
    ("11-50", 30),
    ("51-200", 125),
    ("50-200", 125),
    ("201-500", 350),
    ("200-500", 350),
    ("501-1000", 750),
    ("500-1000", 750),
    ("1001-5000", 3000),
    ("1000-5000", 3000),
    ("5001-10000", 7500),
    ("5000-10000", 7500),
    ("10000+", 10000),
];

/// Returns the ordinal for a band tag.
///
/// Unknown tags and absent values map to `0`, so the mapping is total.
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use greenery_seeker::band_ordinal;
///
/// assert_eq!(band_ordinal(Some("51-200")), 125);
/// assert_eq!(band_ordinal(Some("10000+")), 10000);
/// assert_eq!(band_ordinal(Some("lots")), 0);
/// assert_eq!(band_ordinal(None), 0);
/// ```
pub fn band_ordinal(band: Option<&str>) -> u32 {
    let Some(band) = band else {
        return 0;
    };
    let band = band.trim();
    EMPLOYEE_BANDS
        .iter()
        .find(|(tag, _)| *tag == band)
        .map(|(_, ordinal)| *ordinal)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_band_maps_to_its_ordinal() {
        for (tag, ordinal) in EMPLOYEE_BANDS {
            assert_eq!(band_ordinal(Some(tag)), *ordinal, "band {tag}");
        }
    }

    #[test]
    fn alias_spellings_share_ordinals() {
        assert_eq!(band_ordinal(Some("51-200")), band_ordinal(Some("50-200")));
        assert_eq!(band_ordinal(Some("201-500")), band_ordinal(Some("200-500")));
        assert_eq!(band_ordinal(Some("501-1000")), band_ordinal(Some("500-1000")));
        assert_eq!(
            band_ordinal(Some("1001-5000")),
            band_ordinal(Some("1000-5000"))
        );
        assert_eq!(
            band_ordinal(Some("5001-10000")),
            band_ordinal(Some("5000-10000"))
        );
    }

    #[test]
    fn unknown_and_missing_bands_are_zero() {
        assert_eq!(band_ordinal(None), 0);
        assert_eq!(band_ordinal(Some("")), 0);
        assert_eq!(band_ordinal(Some("a few")), 0);
        assert_eq!(band_ordinal(Some("1-10 people")), 0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(band_ordinal(Some("  11-50 ")), 30);
    }

    #[test]
    fn ordinals_increase_with_band_size() {
        let canonical = [
            "1-10",
            "11-50",
            "51-200",
            "201-500",
            "501-1000",
            "1001-5000",
            "5001-10000",
            "10000+",
        ];
        let ordinals: Vec<u32> = canonical.iter().map(|b| band_ordinal(Some(b))).collect();
        assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
    }
}
