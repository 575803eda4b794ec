/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! estimated visibility area of the ISS, computed as a geodesic buffer around the sub-satellite point.
//!
//! The ring is first computed with continuous longitudes around the center. If it extends across the
//! antimeridian it is split into the parts that fall into [-180,180], so that the result can be used
//! with normalized map coordinates.
//! Footprints that contain a pole are not supported (the ISS orbit has an inclination of 51.6 degrees).

use geo::{BooleanOps, BoundingRect, Destination, Geodesic, Translate};
use geo_types::{Coord,LineString,MultiPolygon,Point,Polygon,Rect};
use iss_common::{angle::normalize_180, geo_constants::horizon_ground_distance};
use crate::{config::TrackerConfig, location::GeoPoint3};

/// closed ring of `segments` geodesic destination points at `radius` meters from `center`.
/// Longitudes stay within 180 degrees of the center longitude, i.e. they might be outside of [-180,180]
pub fn footprint_ring (center: Point<f64>, radius: f64, segments: usize)->LineString<f64> {
    let center_lon = center.x();
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity( segments + 1);

    for i in 0..segments {
        let bearing = 360.0 * i as f64 / segments as f64;
        let p = Geodesic.destination( center, bearing, radius);
        let lon = center_lon + normalize_180( p.x() - center_lon);
        coords.push( Coord { x: lon, y: p.y() });
    }
    if let Some(first) = coords.first().copied() {
        coords.push( first);
    }

    LineString::new( coords)
}

/// visibility footprint in normalized coordinates. This is a single polygon unless it crosses the antimeridian
pub fn visibility_footprint (center: Point<f64>, radius: f64, segments: usize)->MultiPolygon<f64> {
    let polygon = Polygon::new( footprint_ring( center, radius, segments), vec![]);

    match polygon.bounding_rect() {
        Some(bbox) if bbox.min().x < -180.0 || bbox.max().x > 180.0 => {
            let world = Rect::new( Coord { x: -180.0, y: -90.0 }, Coord { x: 180.0, y: 90.0 }).to_polygon();
            let shift = if bbox.max().x > 180.0 { -360.0 } else { 360.0 };

            let mut parts = polygon.intersection( &world).0;
            parts.extend( polygon.translate( shift, 0.0).intersection( &world).0);
            MultiPolygon::new( parts)
        }
        _ => MultiPolygon::new( vec![polygon])
    }
}

/// footprint radius for a config: the configured value or the horizon distance for the configured altitude
pub fn footprint_radius (config: &TrackerConfig)->f64 {
    config.footprint_radius.unwrap_or_else( || horizon_ground_distance( config.altitude))
}

/// the configured footprint around a location's sub-satellite point
pub fn location_footprint (config: &TrackerConfig, position: &GeoPoint3)->MultiPolygon<f64> {
    visibility_footprint( position.point(), footprint_radius( config), config.footprint_segments)
}
