//! Test utilities for ADIF parser testing
//!
//! This module provides sample logs and helper functions used across the
//! parser test modules.


/// Two-record log without a header, one grid-located and one lat/lon-located
pub fn create_two_record_log() -> String {
    concat!(
        "<CALL:5>TEST1<QSO_DATE:8>20250101<TIME_ON:4>1234<GRIDSquare:4>FN20<EOR>\n",
        "<CALL:5>TEST2<QSO_DATE:8>20250102<TIME_ON:4>2345<LAT:6>40.00N<LON:7>074.0W<EOR>\n",
    )
    .to_string()
}

/// Log with a header section that itself contains tags
pub fn create_log_with_header() -> String {
    concat!(
        "Generated by a logging program\n",
        "<ADIF_VER:5>3.1.4\n",
        "<PROGRAMID:6>Logger\n",
        "<EOH>\n",
        "<CALL:6>K1ABC <BAND:3>20m <MODE:2>CW <EOR>\n",
        "<CALL:5>G4XYZ <BAND:3>40m <MODE:3>SSB <EOR>\n",
    )
    .to_string()
}
