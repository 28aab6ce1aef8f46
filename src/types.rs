//! Output data model: detections, their tagged feature payloads, and
//! aggregate statistics.
//!
//! A [`Detection`] is a pure value object. The extractors build the feature
//! payload, the frame processor enriches it with `id`/`timestamp` (and the
//! sequence processor with `frame_number`), and from then on the record is
//! never mutated. Serialization produces one flat JSON object per detection
//! with a `type` discriminator, matching the wire contract consumed by the
//! surrounding service layer.

use serde::{Deserialize, Serialize};

/// One detected road-surface feature, annotated by the orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Unique within one frame-processing call: `"{timestamp}_{index}"`.
    pub id: String,
    /// ISO-8601 capture time, shared by all detections of one call.
    pub timestamp: String,
    /// Ordinal of the originating frame; present only for detections
    /// produced by the sequence processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_number: Option<u64>,
    #[serde(flatten)]
    pub feature: Feature,
}

impl Detection {
    /// Detector confidence in [0, 1].
    pub fn confidence(&self) -> f32 {
        match &self.feature {
            Feature::LaneMarking(lane) => lane.confidence,
            Feature::RoadDamage(damage) => damage.confidence,
        }
    }
}

/// Feature payload, tagged by the `type` field on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feature {
    LaneMarking(LaneMarking),
    RoadDamage(RoadDamage),
}

/// A straight lane-marking segment in pixel space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneMarking {
    pub confidence: f32,
    /// Segment endpoints `[x1, y1, x2, y2]`.
    pub coordinates: [i32; 4],
    /// Euclidean endpoint distance in pixels.
    pub length: f32,
    /// Signed segment angle in degrees, range (-180, 180].
    pub angle: f32,
}

/// A damaged surface region described by its bounding geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadDamage {
    pub confidence: f32,
    /// Axis-aligned bounding box `[x, y, w, h]` with `w, h > 0`.
    pub bbox: [i32; 4],
    /// Region area in pixels², always above the noise floor.
    pub area: f32,
    pub severity: Severity,
    /// Bounding-box width over height.
    pub aspect_ratio: f32,
    /// Region area over bounding-box area, in (0, 1].
    pub extent: f32,
}

/// Coarse three-level damage grading, a step function of region area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Aggregate counters over a detection list.
///
/// Mirrors the summary the surrounding service layer reports over stored
/// results; kept here as a pure value computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DetectionStats {
    pub total_detections: usize,
    pub lane_markings: usize,
    pub road_damage: usize,
    pub high_severity: usize,
    pub average_confidence: f32,
}

impl DetectionStats {
    pub fn collect(detections: &[Detection]) -> Self {
        let mut stats = Self {
            total_detections: detections.len(),
            ..Self::default()
        };
        let mut confidence_sum = 0.0f32;
        for det in detections {
            match &det.feature {
                Feature::LaneMarking(_) => stats.lane_markings += 1,
                Feature::RoadDamage(damage) => {
                    stats.road_damage += 1;
                    if damage.severity == Severity::High {
                        stats.high_severity += 1;
                    }
                }
            }
            confidence_sum += det.confidence();
        }
        if !detections.is_empty() {
            stats.average_confidence = confidence_sum / detections.len() as f32;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lane_detection() -> Detection {
        Detection {
            id: "2026-08-07T10:00:00.000000_0".to_string(),
            timestamp: "2026-08-07T10:00:00.000000".to_string(),
            frame_number: None,
            feature: Feature::LaneMarking(LaneMarking {
                confidence: 0.75,
                coordinates: [100, 420, 260, 340],
                length: 178.9,
                angle: -26.6,
            }),
        }
    }

    fn damage_detection() -> Detection {
        Detection {
            id: "2026-08-07T10:00:00.000000_1".to_string(),
            timestamp: "2026-08-07T10:00:00.000000".to_string(),
            frame_number: Some(10),
            feature: Feature::RoadDamage(RoadDamage {
                confidence: 0.7,
                bbox: [300, 350, 40, 35],
                area: 1400.0,
                severity: Severity::High,
                aspect_ratio: 40.0 / 35.0,
                extent: 1.0,
            }),
        }
    }

    #[test]
    fn lane_marking_serializes_flat_with_type_tag() {
        let json = serde_json::to_value(lane_detection()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["type"], Value::from("lane_marking"));
        for key in ["id", "timestamp", "confidence", "coordinates", "length", "angle"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(
            !obj.contains_key("frame_number"),
            "absent frame_number must be omitted, not null"
        );
        assert_eq!(obj["coordinates"], serde_json::json!([100, 420, 260, 340]));
    }

    #[test]
    fn road_damage_serializes_flat_with_type_tag() {
        let json = serde_json::to_value(damage_detection()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["type"], Value::from("road_damage"));
        assert_eq!(obj["severity"], Value::from("high"));
        assert_eq!(obj["frame_number"], Value::from(10));
        for key in ["bbox", "area", "aspect_ratio", "extent"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn detection_round_trips_through_json() {
        for det in [lane_detection(), damage_detection()] {
            let json = serde_json::to_string(&det).unwrap();
            let back: Detection = serde_json::from_str(&json).unwrap();
            assert_eq!(back, det);
        }
    }

    #[test]
    fn stats_count_by_type_and_severity() {
        let detections = vec![lane_detection(), damage_detection()];
        let stats = DetectionStats::collect(&detections);
        assert_eq!(stats.total_detections, 2);
        assert_eq!(stats.lane_markings, 1);
        assert_eq!(stats.road_damage, 1);
        assert_eq!(stats.high_severity, 1);
        assert!((stats.average_confidence - 0.725).abs() < 1e-6);
    }

    #[test]
    fn stats_on_empty_list_are_zero() {
        let stats = DetectionStats::collect(&[]);
        assert_eq!(stats, DetectionStats::default());
    }
}
