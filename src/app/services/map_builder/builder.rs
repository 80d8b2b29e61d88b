//! Map document assembly
//!
//! Turns resolved points into a [`MapDocument`]: marker layers, heatmaps,
//! the connecting line, the home marker, the legend, the stats panel and
//! the optional time slider features. Rendering to HTML is a separate step.

use super::layers::{Grouping, Legend, group_in_order};
use super::log_stats::LogStats;
use super::options::{HeatmapStyle, MapOptions};
use super::popup::{format_popup, tooltip};
use crate::app::models::{Coordinate, ResolvedPoint};
use crate::constants::{FIT_BOUNDS_PADDING, POPUP_MAX_WIDTH, TILE_LAYERS};
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// A `[lat, lon]` pair as Leaflet expects it
pub type LatLon = [f64; 2];

/// Base map tiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub name: String,
    pub url: String,
    pub attribution: String,
}

/// One QSO marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLon,
    pub color: String,
    pub tooltip: String,
    pub popup: String,
}

/// Heat points plus rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub name: String,
    pub points: Vec<LatLon>,
    #[serde(flatten)]
    pub style: HeatmapStyle,
}

/// A toggleable overlay of markers, optionally carrying its own heatmap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub name: String,
    pub clustered: bool,
    pub markers: Vec<Marker>,
    pub heatmaps: Vec<Heatmap>,
}

/// A time-stamped point for the time slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedFeature {
    pub position: LatLon,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub time: String,
    pub popup: String,
}

/// Rectangle enclosing everything drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl Bounds {
    fn enclosing<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        coords.into_iter().fold(None, |acc: Option<Bounds>, c| {
            let (lat, lon) = c.as_lat_lon();
            Some(match acc {
                None => Bounds {
                    south_west: [lat, lon],
                    north_east: [lat, lon],
                },
                Some(b) => Bounds {
                    south_west: [b.south_west[0].min(lat), b.south_west[1].min(lon)],
                    north_east: [b.north_east[0].max(lat), b.north_east[1].max(lon)],
                },
            })
        })
    }
}

/// Everything needed to render the interactive map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub title: String,
    pub center: LatLon,
    pub zoom_start: u8,
    pub bounds: Bounds,
    pub fit_padding: u16,
    pub popup_max_width: u16,
    pub tile_layers: Vec<TileLayer>,
    pub layers: Vec<MarkerLayer>,
    /// Heatmaps not attached to a marker layer
    pub heatmaps: Vec<Heatmap>,
    pub polyline: Option<Vec<LatLon>>,
    pub home: Option<LatLon>,
    pub legend: Legend,
    pub stats: LogStats,
    /// Empty unless the time slider is enabled
    pub timeline: Vec<TimedFeature>,
}

/// Compose a map from resolved points
///
/// Fails with [`Error::NoPlottableRecords`] only when there is neither a
/// point nor a home location to show. `total_records` is reported in that
/// error.
pub fn build_map(
    points: &[ResolvedPoint],
    home: Option<Coordinate>,
    options: &MapOptions,
    total_records: usize,
) -> Result<MapDocument> {
    let center = home
        .or_else(|| Coordinate::centroid(points.iter().map(|p| &p.coordinate)))
        .ok_or_else(|| Error::no_plottable_records(total_records))?;

    let bounds = Bounds::enclosing(points.iter().map(|p| &p.coordinate).chain(home.iter()))
        .ok_or_else(|| Error::no_plottable_records(total_records))?;

    let grouping = Grouping::from_options(options);
    debug!(
        "Building map for {} points with grouping {:?}",
        points.len(),
        grouping
    );

    let mut layers = build_marker_layers(points, grouping, options.cluster);
    let mut heatmaps = Vec::new();

    if options.heatmap && !points.is_empty() {
        heatmaps.push(heatmap("Heatmap", points.iter(), &options.heatmap_style));
    }

    if options.heatmap_by_band {
        let attach_to = (grouping == Grouping::ByBand).then_some(&mut layers);
        attach_heatmaps(
            points,
            |p| p.record.band_key(),
            grouping,
            attach_to,
            &mut heatmaps,
            &options.heatmap_style,
        );
    }

    if options.heatmap_by_mode {
        let attach_to = (grouping == Grouping::ByMode).then_some(&mut layers);
        attach_heatmaps(
            points,
            |p| p.record.mode_key(),
            grouping,
            attach_to,
            &mut heatmaps,
            &options.heatmap_style,
        );
    }

    let polyline = (options.connect && points.len() >= 2)
        .then(|| points.iter().map(|p| [p.lat(), p.lon()]).collect());

    let timeline = if options.time_slider {
        build_timeline(points)
    } else {
        Vec::new()
    };

    let document = MapDocument {
        title: options.title.clone(),
        center: [center.lat(), center.lon()],
        zoom_start: options.zoom_start,
        bounds,
        fit_padding: FIT_BOUNDS_PADDING,
        popup_max_width: POPUP_MAX_WIDTH,
        tile_layers: TILE_LAYERS
            .iter()
            .map(|(name, url, attribution)| TileLayer {
                name: name.to_string(),
                url: url.to_string(),
                attribution: attribution.to_string(),
            })
            .collect(),
        layers,
        heatmaps,
        polyline,
        home: home.map(|h| [h.lat(), h.lon()]),
        legend: Legend::for_points(grouping, points),
        stats: LogStats::from_points(points),
        timeline,
    };

    info!(
        "Composed map: {} layer(s), {} standalone heatmap(s), {} timed feature(s)",
        document.layers.len(),
        document.heatmaps.len(),
        document.timeline.len()
    );

    Ok(document)
}

fn build_marker_layers(points: &[ResolvedPoint], grouping: Grouping, cluster: bool) -> Vec<MarkerLayer> {
    group_in_order(points, |p| grouping.key(&p.record))
        .into_iter()
        .map(|(key, members)| MarkerLayer {
            name: grouping.layer_name(&key),
            clustered: cluster,
            markers: members
                .into_iter()
                .map(|p| Marker {
                    position: [p.lat(), p.lon()],
                    color: grouping.marker_color(&p.record).to_string(),
                    tooltip: tooltip(&p.record),
                    popup: format_popup(&p.record),
                })
                .collect(),
            heatmaps: Vec::new(),
        })
        .collect()
}

/// Add one heatmap per key, either to the matching marker layer or as its own overlay
fn attach_heatmaps<F>(
    points: &[ResolvedPoint],
    key_fn: F,
    grouping: Grouping,
    mut layers: Option<&mut Vec<MarkerLayer>>,
    standalone: &mut Vec<Heatmap>,
    style: &HeatmapStyle,
) where
    F: Fn(&ResolvedPoint) -> String,
{
    for (key, members) in group_in_order(points, key_fn) {
        let heat = heatmap(&format!("Heatmap: {}", key), members.into_iter(), style);
        let layer_name = grouping.layer_name(&key);
        let target = layers
            .as_deref_mut()
            .and_then(|layers| layers.iter_mut().find(|l| l.name == layer_name));

        match target {
            Some(layer) => layer.heatmaps.push(heat),
            None => standalone.push(heat),
        }
    }
}

fn heatmap<'a>(
    name: &str,
    points: impl Iterator<Item = &'a ResolvedPoint>,
    style: &HeatmapStyle,
) -> Heatmap {
    Heatmap {
        name: name.to_string(),
        points: points.map(|p| [p.lat(), p.lon()]).collect(),
        style: style.clone(),
    }
}

fn build_timeline(points: &[ResolvedPoint]) -> Vec<TimedFeature> {
    points
        .iter()
        .filter_map(|p| {
            let when = p.record.qso_datetime()?;
            Some(TimedFeature {
                position: [p.lat(), p.lon()],
                time: when.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                popup: format_popup(&p.record),
            })
        })
        .collect()
}
