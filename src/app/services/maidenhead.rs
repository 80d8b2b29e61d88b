//! Maidenhead grid square conversion
//!
//! Converts 2, 4, 6 or 8 character locators (e.g. `FN20`, `JN58TD`,
//! `IO91WM45`) to the centre of the cell they describe. Characters beyond
//! the eighth are ignored.

use crate::app::models::Coordinate;
use crate::constants::maidenhead::{
    EXTENDED, FIELD, FIELD_MAX_LETTER, SQUARE, SUBSQUARE, SUBSQUARE_MAX_LETTER,
};

/// Convert a Maidenhead locator to the centre of its cell
///
/// Returns `None` for locators shorter than two characters, with an odd
/// number of significant characters, or with the wrong character class in
/// any pair (letters for pairs one and three, digits for pairs two and four).
///
/// # Examples
///
/// ```rust
/// use adimap::maidenhead_to_coordinate;
///
/// let centre = maidenhead_to_coordinate("FN20").unwrap();
/// assert!((centre.lat() - 40.5).abs() < 1e-9);
/// assert!((centre.lon() - -75.0).abs() < 1e-9);
///
/// assert!(maidenhead_to_coordinate("FN2").is_none());
/// ```
pub fn maidenhead_to_coordinate(grid: &str) -> Option<Coordinate> {
    let normalized = grid.trim().to_ascii_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    let len = chars.len();

    if len < 2 {
        return None;
    }

    let mut lon = -180.0;
    let mut lat = -90.0;
    let mut cell = FIELD;

    lon += f64::from(letter_index(chars[0], FIELD_MAX_LETTER)?) * FIELD.0;
    lat += f64::from(letter_index(chars[1], FIELD_MAX_LETTER)?) * FIELD.1;

    if len >= 3 {
        if len == 3 {
            return None;
        }
        lon += f64::from(chars[2].to_digit(10)?) * SQUARE.0;
        lat += f64::from(chars[3].to_digit(10)?) * SQUARE.1;
        cell = SQUARE;
    }

    if len >= 5 {
        if len == 5 {
            return None;
        }
        lon += f64::from(letter_index(chars[4], SUBSQUARE_MAX_LETTER)?) * SUBSQUARE.0;
        lat += f64::from(letter_index(chars[5], SUBSQUARE_MAX_LETTER)?) * SUBSQUARE.1;
        cell = SUBSQUARE;
    }

    if len >= 7 {
        if len == 7 {
            return None;
        }
        lon += f64::from(chars[6].to_digit(10)?) * EXTENDED.0;
        lat += f64::from(chars[7].to_digit(10)?) * EXTENDED.1;
        cell = EXTENDED;
    }

    Coordinate::new(lat + cell.1 / 2.0, lon + cell.0 / 2.0)
}

/// Offset of an upper-case letter from 'A', if it is within `A..=max`
fn letter_index(c: char, max: u8) -> Option<u32> {
    if c.is_ascii_uppercase() && (c as u8) <= max {
        Some(u32::from(c as u8 - b'A'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_centre(grid: &str, lat: f64, lon: f64) {
        let coord = maidenhead_to_coordinate(grid)
            .unwrap_or_else(|| panic!("{} should convert", grid));
        assert!(
            (coord.lat() - lat).abs() < TOLERANCE,
            "{}: lat {} != {}",
            grid,
            coord.lat(),
            lat
        );
        assert!(
            (coord.lon() - lon).abs() < TOLERANCE,
            "{}: lon {} != {}",
            grid,
            coord.lon(),
            lon
        );
    }

    #[test]
    fn test_field_only() {
        // F=5, N=13 -> corner (-80, 40), cell 20x10
        assert_centre("FN", 45.0, -70.0);
        assert_centre("AA", -85.0, -170.0);
        assert_centre("RR", 85.0, 170.0);
    }

    #[test]
    fn test_square() {
        // corner lon -80 + 2*2 = -76, lat 40 + 0 = 40, cell 2x1
        assert_centre("FN20", 40.5, -75.0);
        assert_centre("JN58", 48.5, 11.0);
    }

    #[test]
    fn test_subsquare() {
        // JN58TD: lon 10 + 19*(2/24), lat 48 + 3*(1/24), plus half cell
        let lon = 10.0 + 19.0 * (2.0 / 24.0) + (2.0 / 24.0) / 2.0;
        let lat = 48.0 + 3.0 * (1.0 / 24.0) + (1.0 / 24.0) / 2.0;
        assert_centre("JN58TD", lat, lon);
    }

    #[test]
    fn test_extended_square() {
        let lon = -2.0 + 22.0 * (2.0 / 24.0) + 4.0 * (2.0 / 240.0) + (2.0 / 240.0) / 2.0;
        let lat = 51.0 + 12.0 * (1.0 / 24.0) + 5.0 * (1.0 / 240.0) + (1.0 / 240.0) / 2.0;
        assert_centre("IO91WM45", lat, lon);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(
            maidenhead_to_coordinate("  fn20  "),
            maidenhead_to_coordinate("FN20")
        );
        assert_eq!(
            maidenhead_to_coordinate("jn58td"),
            maidenhead_to_coordinate("JN58TD")
        );
    }

    #[test]
    fn test_odd_lengths_rejected() {
        assert!(maidenhead_to_coordinate("F").is_none());
        assert!(maidenhead_to_coordinate("FN2").is_none());
        assert!(maidenhead_to_coordinate("FN20A").is_none());
        assert!(maidenhead_to_coordinate("FN20AB1").is_none());
    }

    #[test]
    fn test_wrong_character_classes_rejected() {
        assert!(maidenhead_to_coordinate("").is_none());
        assert!(maidenhead_to_coordinate("12").is_none());
        assert!(maidenhead_to_coordinate("FNA0").is_none());
        assert!(maidenhead_to_coordinate("FN2X").is_none());
        assert!(maidenhead_to_coordinate("FN2012").is_none());
        assert!(maidenhead_to_coordinate("FN20ABCD").is_none());
        assert!(maidenhead_to_coordinate("F N20").is_none());
    }

    #[test]
    fn test_out_of_range_letters_rejected() {
        assert!(maidenhead_to_coordinate("SA").is_none());
        assert!(maidenhead_to_coordinate("AZ").is_none());
        assert!(maidenhead_to_coordinate("FN20YA").is_none());
        assert!(maidenhead_to_coordinate("FN20XX").is_some());
    }

    #[test]
    fn test_characters_beyond_eight_ignored() {
        assert_eq!(
            maidenhead_to_coordinate("IO91WM45ZZ!"),
            maidenhead_to_coordinate("IO91WM45")
        );
    }

    #[test]
    fn test_equator_cell_is_not_absent() {
        // JJ00 starts at (0, 0)
        assert_centre("JJ00", 0.5, 1.0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            maidenhead_to_coordinate("FN20"),
            maidenhead_to_coordinate("FN20")
        );
    }
}
