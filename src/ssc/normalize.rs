use crate::domain::SatelliteLocations;
use crate::ssc::envelope;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const NO_DATA_FOUND: &str = "No satellite data found for the requested observatories and time range.";
const UNKNOWN_SATELLITE: &str = "Unknown Satellite";
// SSC reports positions in meters
const SCALE_DIVISOR: f64 = 1_000_000.0;

/// Flattens an SSC locations document into vertices and labels.
///
/// Structural irregularities are recovered from at the narrowest scope: a malformed point is
/// skipped, a malformed satellite is skipped, and a document without a satellite list yields an
/// empty result with a message. Only a body that is not JSON at all is an error.
#[instrument(skip_all)]
pub fn normalize_locations(body: &str) -> Result<SatelliteLocations, NormalizeError> {
    let root: Value = serde_json::from_str(body)?;

    let Some(blocks) = satellite_blocks(&root) else {
        warn!("⚠️ Could not locate the satellite list in the SSC response");
        return Ok(SatelliteLocations::no_data_found(NO_DATA_FOUND));
    };

    let mut locations = SatelliteLocations::new();
    for (index, block) in blocks.iter().enumerate() {
        let Some(details) = envelope::payload(block).and_then(Value::as_object) else {
            warn!("⚠️ Skipping satellite block {}, it is not a [metadata, details] pair", index);
            continue;
        };

        let id = details.get("Id").and_then(Value::as_str).unwrap_or(UNKNOWN_SATELLITE);

        let Some(coordinates) = coordinate_set(details) else {
            warn!("⚠️ Skipping satellite '{}', its coordinates could not be located", id);
            continue;
        };

        append_points(&mut locations, id, coordinates);
    }

    if locations.is_empty() {
        info!("SSC returned {} satellite blocks without usable coordinates", blocks.len());
        return Ok(SatelliteLocations::no_data_found(NO_DATA_FOUND));
    }

    info!("Parsed {} vertices and {} labels", locations.vertices().len(), locations.labels().len());
    Ok(locations)
}

fn satellite_blocks(root: &Value) -> Option<&[Value]> {
    envelope::payload(root)
        .and_then(|document| envelope::field_payload(document, "Result"))
        .and_then(|result| result.get("Data"))
        .and_then(envelope::list_payload)
}

fn coordinate_set(details: &Map<String, Value>) -> Option<&Map<String, Value>> {
    details
        .get("Coordinates")
        .and_then(envelope::list_payload)
        .and_then(<[Value]>::first)
        .and_then(envelope::payload)
        .and_then(Value::as_object)
}

fn axis<'a>(coordinates: &'a Map<String, Value>, name: &str, id: &str) -> &'a [Value] {
    match coordinates.get(name).and_then(envelope::list_payload) {
        Some(values) => values,
        None => {
            warn!("⚠️ Satellite '{}' has no usable {} values", id, name);
            &[]
        }
    }
}

fn append_points(locations: &mut SatelliteLocations, id: &str, coordinates: &Map<String, Value>) {
    let xs = axis(coordinates, "X", id);
    let ys = axis(coordinates, "Y", id);
    let zs = axis(coordinates, "Z", id);

    // zip stops at the shortest axis
    for (index, ((x, y), z)) in xs.iter().zip(ys).zip(zs).enumerate() {
        match (to_f64(x), to_f64(y), to_f64(z)) {
            (Some(x), Some(y), Some(z)) => {
                locations.push(id, [x / SCALE_DIVISOR, y / SCALE_DIVISOR, z / SCALE_DIVISOR]);
            }
            _ => warn!("⚠️ Invalid coordinate for '{}' at {}: x={}, y={}, z={}", id, index, x, y, z),
        }
    }
}

/// Accepts JSON numbers and strings holding a finite number.
fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|value| value.is_finite())
}

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("SSC response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn document(blocks: Value) -> String {
        json!([
            "gov.nasa.gsfc.sscweb.schema.DataResult",
            {"Result": ["gov.nasa.gsfc.sscweb.schema.DataResult", {"StatusCode": "SUCCESS", "Data": ["java.util.ArrayList", blocks]}]}
        ])
        .to_string()
    }

    fn satellite(id: &str, x: Value, y: Value, z: Value) -> Value {
        json!([
            "gov.nasa.gsfc.sscweb.schema.SatelliteData",
            {
                "Id": id,
                "Coordinates": ["java.util.ArrayList", [
                    ["gov.nasa.gsfc.sscweb.schema.CoordinateData", {"X": ["[D", x], "Y": ["[D", y], "Z": ["[D", z]}]
                ]]
            }
        ])
    }

    #[test_log::test]
    fn normalizes_a_full_ssc_response() {
        let body = include_str!("../../tests/resources/ssc_locations_response.json");

        let locations = normalize_locations(body).unwrap();

        assert_eq!(
            locations.vertices(),
            [
                [1500.0, -0.25, 3.0],
                [1501.0, -0.26, 3.1],
                [1502.0, -0.27, 3.2],
                [42.164, 0.0, 0.001],
                [0.0, 42.164, -0.001],
            ]
        );
        assert_eq!(locations.labels(), ["ace", "ace", "ace", "goes16", "goes16"]);
        assert_eq!(locations.message(), None);
    }

    #[test_log::test]
    fn scales_every_coordinate_by_one_million() {
        let body = document(json!([satellite("wind", json!([1.0, 2_500_000.0]), json!([-3.0, 0.0]), json!([7e9, 12.5]))]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(
            locations.vertices(),
            [
                [1.0 / 1_000_000.0, -3.0 / 1_000_000.0, 7e9 / 1_000_000.0],
                [2_500_000.0 / 1_000_000.0, 0.0, 12.5 / 1_000_000.0],
            ]
        );
    }

    #[test_log::test]
    fn returns_no_data_found_for_an_empty_satellite_list() {
        let body = json!(["meta", {"Result": ["meta", {"Data": ["meta", []]}]}]).to_string();

        let locations = normalize_locations(&body).unwrap();

        assert!(locations.vertices().is_empty());
        assert!(locations.labels().is_empty());
        assert_eq!(locations.message(), Some(NO_DATA_FOUND));
    }

    #[rstest]
    #[case::not_an_envelope(json!({"Result": []}))]
    #[case::root_too_short(json!(["meta"]))]
    #[case::missing_result(json!(["meta", {"Other": []}]))]
    #[case::result_not_an_envelope(json!(["meta", {"Result": {"Data": ["meta", []]}}]))]
    #[case::missing_data(json!(["meta", {"Result": ["meta", {"StatusCode": "ERROR"}]}]))]
    #[case::data_not_a_list(json!(["meta", {"Result": ["meta", {"Data": ["meta", {"ace": 1}]}]}]))]
    #[case::scalar(json!(42))]
    #[case::null(json!(null))]
    fn returns_no_data_found_when_the_satellite_list_is_missing(#[case] body: Value) {
        let locations = normalize_locations(&body.to_string()).unwrap();

        assert_eq!(locations, SatelliteLocations::no_data_found(NO_DATA_FOUND));
    }

    #[test_log::test]
    fn extracts_only_as_many_points_as_the_shortest_axis() {
        let body = document(json!([satellite("ace", json!([1.0, 2.0, 3.0]), json!([1.0, 2.0, 3.0]), json!([1.0, 2.0]))]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.len(), 2);
        assert_eq!(locations.labels(), ["ace", "ace"]);
    }

    #[rstest]
    #[case::text(json!("abc"))]
    #[case::null(json!(null))]
    #[case::boolean(json!(true))]
    #[case::list(json!([1.0]))]
    #[case::not_a_number(json!("NaN"))]
    #[case::infinity(json!("inf"))]
    #[case::negative_infinity(json!("-infinity"))]
    #[case::overflow(json!("1e400"))]
    fn skips_only_the_point_with_an_invalid_value(#[case] invalid: Value) {
        let body = document(json!([satellite(
            "wind",
            json!([1_000_000.0, 2_000_000.0, 3_000_000.0]),
            json!([1_000_000.0, invalid, 3_000_000.0]),
            json!([1_000_000.0, 2_000_000.0, 3_000_000.0])
        )]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.vertices(), [[1.0, 1.0, 1.0], [3.0, 3.0, 3.0]]);
        assert_eq!(locations.labels(), ["wind", "wind"]);
    }

    #[test_log::test]
    fn never_emits_non_finite_coordinates() {
        let body = document(json!([satellite("ace", json!(["NaN", 1_000_000.0]), json!(["inf", 1_000_000.0]), json!([1.0, 1_000_000.0]))]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.vertices(), [[1.0, 1.0, 1.0]]);
        assert_eq!(
            serde_json::to_value(&locations).unwrap(),
            json!({"vertices": [[1.0, 1.0, 1.0]], "labels": ["ace"]})
        );
    }

    #[test_log::test]
    fn accepts_numbers_encoded_as_strings() {
        let body = document(json!([satellite("ace", json!(["1000000", " 2e6 "]), json!([0, "-1000000.0"]), json!([0.0, 0]))]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.vertices(), [[1.0, 0.0, 0.0], [2.0, -1.0, 0.0]]);
    }

    #[test_log::test]
    fn skips_malformed_blocks_and_keeps_the_rest() {
        let body = document(json!([
            "not an envelope",
            ["meta"],
            ["meta", "details should be an object"],
            ["meta", {"Id": "no-coordinates"}],
            ["meta", {"Id": "bad-coordinates", "Coordinates": ["meta", []]}],
            ["meta", {"Id": "flat-coordinates", "Coordinates": ["meta", [{"X": ["[D", [1.0]]}]]}],
            satellite("goes17", json!([2_000_000.0]), json!([4_000_000.0]), json!([6_000_000.0])),
        ]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.vertices(), [[2.0, 4.0, 6.0]]);
        assert_eq!(locations.labels(), ["goes17"]);
    }

    #[test_log::test]
    fn labels_a_satellite_without_an_id_as_unknown() {
        let body = document(json!([[
            "gov.nasa.gsfc.sscweb.schema.SatelliteData",
            {"Coordinates": ["meta", [["meta", {"X": ["[D", [0.0]], "Y": ["[D", [0.0]], "Z": ["[D", [0.0]]}]]]}
        ]]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.labels(), ["Unknown Satellite"]);
    }

    #[rstest]
    #[case::missing_axis(json!({"X": ["[D", [1.0]], "Y": ["[D", [1.0]]}))]
    #[case::axis_not_an_envelope(json!({"X": ["[D", [1.0]], "Y": ["[D", [1.0]], "Z": [1.0]}))]
    #[case::axis_payload_not_a_list(json!({"X": ["[D", [1.0]], "Y": ["[D", [1.0]], "Z": ["[D", 1.0]}))]
    fn treats_a_malformed_axis_as_empty(#[case] coordinate_set: Value) {
        let body = document(json!([["meta", {"Id": "ace", "Coordinates": ["meta", [["meta", coordinate_set]]]}]]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations, SatelliteLocations::no_data_found(NO_DATA_FOUND));
    }

    #[test_log::test]
    fn vertices_and_labels_stay_aligned_across_satellites() {
        let body = document(json!([
            satellite("ace", json!([1.0, "x", 3.0]), json!([1.0, 2.0, 3.0]), json!([1.0, 2.0, 3.0])),
            satellite("wind", json!([1.0]), json!([1.0, 2.0]), json!([1.0, 2.0, 3.0])),
        ]));

        let locations = normalize_locations(&body).unwrap();

        assert_eq!(locations.vertices().len(), locations.labels().len());
        assert_eq!(locations.labels(), ["ace", "ace", "wind"]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::html("<html>Service Unavailable</html>")]
    #[case::truncated("[\"meta\", {\"Result\": ")]
    fn fails_for_a_body_that_is_not_json(#[case] body: &str) {
        let result = normalize_locations(body);
        assert!(matches!(result, Err(NormalizeError::InvalidJson(_))));
    }
}
