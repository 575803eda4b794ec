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

use std::time::Duration;
use serde::{Serialize,Deserialize};
use iss_common::datetime::*;

#[derive(Serialize,Deserialize,Debug,PartialEq)]
struct Timing {
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    interval: Duration,

    #[serde(deserialize_with="deserialize_optional_duration", serialize_with="serialize_optional_duration")]
    timeout: Option<Duration>,
}

#[test]
fn test_epoch_secs() {
    let dt = from_epoch_secs_f64( 1557499056.5).unwrap();
    assert_eq!( dt.timestamp(), 1557499056);
    assert_eq!( dt.timestamp_subsec_millis(), 500);

    assert!( from_epoch_secs_f64( f64::NAN).is_none());
    assert!( from_epoch_secs_f64( f64::INFINITY).is_none());
}

#[test]
fn test_duration_serde() {
    let t: Timing = serde_json::from_str( r#"{"interval": "5s", "timeout": "1500ms"}"#).unwrap();
    assert_eq!( t, Timing { interval: secs(5), timeout: Some( millis(1500)) });

    let s = serde_json::to_string( &t).unwrap();
    assert_eq!( s, r#"{"interval":"5000ms","timeout":"1500ms"}"#);

    let t: Timing = serde_json::from_str( r#"{"interval": "2 minutes", "timeout": null}"#).unwrap();
    assert_eq!( t.interval, secs(120));
    assert!( t.timeout.is_none());

    assert!( serde_json::from_str::<Timing>( r#"{"interval": "soon", "timeout": null}"#).is_err());
}
