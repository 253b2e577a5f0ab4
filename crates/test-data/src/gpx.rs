//! GPX file generation from route points.
//!
//! Writes GPX 1.1 XML that the estimator's GPX reader accepts. Routes are
//! written as `<rte>` so the reader takes the route branch, tracks as
//! `<trk>`.

use std::fmt::Write as _;

use crate::sources::RoutePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpxLayout {
    Route,
    Track,
}

/// Generates a GPX 1.1 XML document from route points.
pub fn generate_gpx(points: &[RoutePoint], name: &str, layout: GpxLayout) -> Vec<u8> {
    let mut gpx = String::new();

    gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    gpx.push('\n');
    gpx.push_str(r#"<gpx version="1.1" creator="trail-energy-test-data""#);
    gpx.push_str(r#" xmlns="http://www.topografix.com/GPX/1/1">"#);
    gpx.push('\n');

    let _ = writeln!(gpx, "  <metadata>\n    <name>{}</name>\n  </metadata>", escape_xml(name));

    let (open, point_tag, close) = match layout {
        GpxLayout::Route => ("  <rte>", "rtept", "  </rte>"),
        GpxLayout::Track => ("  <trk>\n    <trkseg>", "trkpt", "    </trkseg>\n  </trk>"),
    };

    gpx.push_str(open);
    gpx.push('\n');
    for point in points {
        let _ = writeln!(
            gpx,
            r#"      <{point_tag} lat="{:.7}" lon="{:.7}"><ele>{:.2}</ele></{point_tag}>"#,
            point.lat, point.lon, point.elevation
        );
    }
    gpx.push_str(close);
    gpx.push('\n');
    gpx.push_str("</gpx>\n");

    gpx.into_bytes()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
