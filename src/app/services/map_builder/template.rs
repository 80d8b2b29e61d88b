//! HTML rendering for map documents
//!
//! The page loads Leaflet and its plugins from a CDN. Fixed panels (title,
//! legend, stats, time slider) are rendered here; markers, layers and heat
//! points are embedded as a JSON payload and drawn by a small script.

use super::builder::MapDocument;
use super::layers::Legend;
use super::log_stats::LogStats;
use super::popup::escape_html;
use crate::{Error, Result};
use std::collections::BTreeMap;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{TITLE}}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
<script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.min.js"></script>
<style>
html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
#map { position: absolute; top: 0; bottom: 0; right: 0; left: 0; }
.adimap-panel { position: fixed; z-index: 9999; background: white; border-radius: 8px;
  box-shadow: 0 1px 6px rgba(0,0,0,0.15); font-family: sans-serif; }
.adimap-row { display: flex; justify-content: space-between; }
.adimap-swatch { display: inline-block; width: 12px; height: 12px; border-radius: 50%; margin-right: 6px; }
</style>
</head>
<body>
<div id="map"></div>
{{PANELS}}
<script>
const ADIMAP = {{DATA}};
{{SCRIPT}}
</script>
</body>
</html>
"#;

const MAP_SCRIPT: &str = r#"(function () {
  const data = ADIMAP;
  const map = L.map('map', { center: data.center, zoom: data.zoom_start });

  const bases = {};
  data.tile_layers.forEach(function (tile, i) {
    const layer = L.tileLayer(tile.url, { attribution: tile.attribution });
    bases[tile.name] = layer;
    if (i === 0) { layer.addTo(map); }
  });

  const overlays = {};
  function heatLayer(heat) {
    return L.heatLayer(heat.points, {
      radius: heat.radius, blur: heat.blur, minOpacity: heat.min_opacity
    });
  }

  data.layers.forEach(function (entry) {
    const group = L.featureGroup();
    const target = entry.clustered ? L.markerClusterGroup() : group;
    entry.markers.forEach(function (m) {
      const icon = L.AwesomeMarkers.icon({ icon: 'signal', prefix: 'fa', markerColor: m.color });
      L.marker(m.position, { icon: icon })
        .bindTooltip(m.tooltip)
        .bindPopup(m.popup, { maxWidth: data.popup_max_width })
        .addTo(target);
    });
    if (target !== group) { target.addTo(group); }
    entry.heatmaps.forEach(function (heat) { heatLayer(heat).addTo(group); });
    group.addTo(map);
    overlays[entry.name] = group;
  });

  data.heatmaps.forEach(function (heat) {
    const layer = heatLayer(heat);
    layer.addTo(map);
    overlays[heat.name] = layer;
  });

  if (data.polyline) {
    const line = L.polyline(data.polyline, { weight: 2, opacity: 0.6 });
    line.addTo(map);
    overlays['Path'] = line;
  }

  if (data.home) {
    const icon = L.AwesomeMarkers.icon({ icon: 'home', prefix: 'fa', markerColor: 'red' });
    L.marker(data.home, { icon: icon }).bindTooltip('Home QTH').addTo(map);
  }

  const b = data.bounds;
  if (b.south_west[0] === b.north_east[0] && b.south_west[1] === b.north_east[1]) {
    map.setView(b.south_west, Math.max(data.zoom_start, 6));
  } else {
    map.fitBounds([b.south_west, b.north_east], { padding: [data.fit_padding, data.fit_padding] });
  }

  if (data.timeline.length > 0) {
    const features = data.timeline
      .map(function (f) { return { at: Date.parse(f.time), f: f }; })
      .sort(function (x, y) { return x.at - y.at; });
    const timeLayer = L.layerGroup().addTo(map);
    overlays['Time slider'] = timeLayer;
    const slider = document.getElementById('adimap-time');
    const label = document.getElementById('adimap-time-label');
    slider.max = features.length - 1;
    slider.value = features.length - 1;
    function show(index) {
      timeLayer.clearLayers();
      features.slice(0, index + 1).forEach(function (item) {
        L.circleMarker(item.f.position, { radius: 5 })
          .bindPopup(item.f.popup, { maxWidth: data.popup_max_width })
          .addTo(timeLayer);
      });
      label.textContent = features[index].f.time.replace('T', ' ').replace('Z', '');
    }
    slider.addEventListener('input', function () { show(parseInt(slider.value, 10)); });
    show(features.length - 1);
  }

  L.control.layers(bases, overlays, { collapsed: false }).addTo(map);
})();"#;

impl MapDocument {
    /// Render a self-contained HTML page
    pub fn render_html(&self) -> Result<String> {
        let data = embed_json(self)?;

        let mut panels = vec![
            title_panel(&self.title),
            legend_panel(&self.legend),
            stats_panel(&self.stats),
        ];
        if !self.timeline.is_empty() {
            panels.push(time_slider_panel());
        }

        let title = escape_html(&self.title);
        let panels = panels.join("\n");

        Ok(fill_slots(
            PAGE_TEMPLATE,
            &[
                ("{{TITLE}}", title.as_str()),
                ("{{PANELS}}", panels.as_str()),
                ("{{DATA}}", data.as_str()),
                ("{{SCRIPT}}", MAP_SCRIPT),
            ],
        ))
    }
}

/// Substitute each slot once, in document order, never rescanning inserted text
fn fill_slots(template: &str, slots: &[(&str, &str)]) -> String {
    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut page = String::with_capacity(template.len() + extra);
    let mut rest = template;

    for (slot, value) in slots {
        if let Some(pos) = rest.find(slot) {
            page.push_str(&rest[..pos]);
            page.push_str(value);
            rest = &rest[pos + slot.len()..];
        }
    }

    page.push_str(rest);
    page
}

/// Serialize for embedding inside a `<script>` element
///
/// `</` is written as `<\/` so no value can close the script block.
pub fn embed_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| Error::json("Failed to serialize map data", e))?;
    Ok(json.replace("</", "<\\/"))
}

fn title_panel(title: &str) -> String {
    format!(
        r#"<div class="adimap-panel" style="top: 10px; left: 50%; transform: translateX(-50%); padding: 6px 10px; font-size: 16px;">{}</div>"#,
        escape_html(title)
    )
}

fn legend_panel(legend: &Legend) -> String {
    let rows: String = legend
        .entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div style="display:flex;align-items:center;margin:2px 0;"><span class="adimap-swatch" style="background:{};"></span>{}</div>"#,
                escape_html(&entry.color),
                escape_html(&entry.label)
            )
        })
        .collect();

    format!(
        r#"<div class="adimap-panel" style="bottom: 20px; right: 20px; padding: 8px 10px; font-size: 13px;"><b>{}</b><div style="margin-top:4px;">{}</div></div>"#,
        escape_html(&legend.title),
        rows
    )
}

fn stats_panel(stats: &LogStats) -> String {
    format!(
        concat!(
            r#"<div class="adimap-panel" style="left: 20px; bottom: 20px; padding: 10px 12px; font-size: 13px; min-width: 220px;">"#,
            "<b>Log stats</b>",
            r#"<div style="margin-top:6px">"#,
            "<div><b>Total QSOs:</b> {}</div>",
            "<div><b>Unique calls:</b> {}</div>",
            "<div><b>Date range:</b> {}</div>",
            "</div>",
            r#"<div style="margin-top:8px"><b>By band</b>{}</div>"#,
            r#"<div style="margin-top:8px"><b>By mode</b>{}</div>"#,
            "</div>"
        ),
        stats.total,
        stats.unique_calls,
        escape_html(&stats.date_range()),
        count_rows(&stats.by_band),
        count_rows(&stats.by_mode)
    )
}

fn count_rows(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(key, count)| {
            format!(
                r#"<div class="adimap-row"><span>{}</span><span>{}</span></div>"#,
                escape_html(key),
                count
            )
        })
        .collect()
}

fn time_slider_panel() -> String {
    concat!(
        r#"<div class="adimap-panel" style="top: 60px; left: 50%; transform: translateX(-50%); padding: 6px 10px; font-size: 13px;">"#,
        r#"<input id="adimap-time" type="range" min="0" step="1" style="width: 320px;">"#,
        r#" <span id="adimap-time-label"></span>"#,
        "</div>"
    )
    .to_string()
}
