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

//! live position tracking of the International Space Station.
//!
//! A [`LocationPoller`] periodically fetches the current sub-satellite point from a public REST API
//! (see [`sample`] for the wire format), turns each sample into a [`DerivedLocation`] with velocity and
//! course estimated from the previous sample, and hands it to a registered [`LocationSubscriber`].
//! Consumers can accumulate the locations into a [`GroundTrack`] and compute the estimated
//! [`footprint`] from which the station is visible.

pub mod errors;
pub use errors::{IssTrackerError,Result};

pub mod config;
pub use config::*;

pub mod sample;
pub use sample::*;

pub mod location;
pub use location::*;

pub mod poller;
pub use poller::*;

pub mod track;
pub use track::*;

pub mod footprint;
pub use footprint::*;

/// the endpoint that reports the current ISS position (updated about once per second, the API
/// documentation asks clients to not poll more often than every 5 sec)
pub const ISS_NOW_URL: &str = "http://api.open-notify.org/iss-now.json";
