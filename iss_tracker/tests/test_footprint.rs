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

use geo::{Area, BoundingRect, Distance, Geodesic, Point};
use iss_tracker::*;
use iss_common::geo_constants::horizon_ground_distance;

#[test]
fn test_equator_footprint() {
    let center = Point::new( 20.0, 0.0);
    let ring = footprint_ring( center, FOOTPRINT_RADIUS, 72);
    assert_eq!( ring.0.len(), 73);
    assert_eq!( ring.0.first(), ring.0.last());

    for c in &ring.0 {
        let d = Geodesic.distance( center, Point::new( c.x, c.y));
        assert!( (d - FOOTPRINT_RADIUS).abs() < 1.0, "vertex {c:?} is {d}m from center");
    }

    let footprint = visibility_footprint( center, FOOTPRINT_RADIUS, 72);
    assert_eq!( footprint.0.len(), 1);
    assert!( footprint.unsigned_area() > 0.0);
}

#[test]
fn test_antimeridian_split() {
    let center = Point::new( 175.0, 40.0);
    let footprint = visibility_footprint( center, FOOTPRINT_RADIUS, 72);
    println!("footprint parts: {}", footprint.0.len());

    assert_eq!( footprint.0.len(), 2);
    let bbox = footprint.bounding_rect().unwrap();
    assert!( bbox.min().x >= -180.0 - 1e-9);
    assert!( bbox.max().x <= 180.0 + 1e-9);

    // splitting must not lose any area
    let unsplit = geo_types::Polygon::new( footprint_ring( center, FOOTPRINT_RADIUS, 72), vec![]);
    let rel_diff = (footprint.unsigned_area() - unsplit.unsigned_area()).abs() / unsplit.unsigned_area();
    assert!( rel_diff < 1e-6);
}

#[test]
fn test_configured_radius() {
    let position = GeoPoint3::new( 0.0, 0.0, ISS_ALTITUDE);

    let config = TrackerConfig::default();
    assert_eq!( footprint_radius( &config), FOOTPRINT_RADIUS);

    // without explicit radius we use the horizon, which is close to the default
    let config = TrackerConfig { footprint_radius: None, ..TrackerConfig::default() };
    let r = footprint_radius( &config);
    assert_eq!( r, horizon_ground_distance( ISS_ALTITUDE));
    assert!( (r - FOOTPRINT_RADIUS).abs() < 100_000.0);

    let footprint = location_footprint( &config, &position);
    assert_eq!( footprint.0.len(), 1);
    assert_eq!( footprint.0[0].exterior().0.len(), config.footprint_segments + 1);
}
