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

use std::path::PathBuf;
use anyhow::{Result,anyhow};
use clap::Parser;
use tokio::signal::ctrl_c;
use tracing::{info,warn,error};
use tracing_subscriber::EnvFilter;
use iss_common::config::{config_to_ron_string, find_and_load_config, ConfigError};
use iss_tracker::{
    TrackerConfig, HttpPositionSource, LocationPoller, ChannelSubscriber, PollerEvent, PollerStatus,
    DerivedLocation, GroundTrack, location_footprint
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "poll the current ISS position and report derived locations")]
pub struct Args {
    /// RON config file (default is iss_tracker.ron in ./configs or ~/.config/iss_tracker, if it exists)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// override the URL of the position API
    #[arg(long)]
    pub url: Option<String>,

    /// print locations as JSON lines
    #[arg(long)]
    pub json: bool,

    /// stop after the given number of locations
    #[arg(short,long)]
    pub n_updates: Option<usize>,

    /// print the effective config and exit
    #[arg(long)]
    pub show_config: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();
    let config = get_config( &args)?;

    if args.show_config {
        println!("{}", config_to_ron_string( &config)?);
        return Ok(())
    }

    let source = HttpPositionSource::from_config( &config)?;
    let (subscriber, mut rx) = ChannelSubscriber::new();
    let mut poller = LocationPoller::new( config.clone(), source, subscriber);
    let mut track = GroundTrack::new( config.track_gap);
    let mut n_updates = 0;

    poller.start()?;

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(PollerEvent::Location(location)) => {
                    if track.add( &location) && track.n_parts() > 1 {
                        warn!("no updates for more than {:?}, starting new track part", config.track_gap);
                    }
                    report_location( &args, &config, &location, &track)?;

                    n_updates += 1;
                    if args.n_updates.is_some_and( |n| n_updates >= n) {
                        poller.stop();
                        break
                    }
                }
                Some(PollerEvent::Status(PollerStatus::Failed{reason})) => {
                    error!("poller gave up after {} consecutive failures", config.max_failures);
                    return Err( anyhow!("polling failed: {reason}"))
                }
                Some(PollerEvent::Status(status)) => info!("poller status: {status:?}"),
                None => break
            },
            _ = ctrl_c() => {
                poller.stop();
                break
            }
        }
    }

    info!("track has {} points in {} parts", track.n_points(), track.n_parts());
    Ok(())
}

const CONFIG_FILE: &str = "iss_tracker.ron";

/// where we look for config files if none is given on the command line
fn config_dirs ()->Vec<PathBuf> {
    let mut dirs = vec![ PathBuf::from("configs") ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push( PathBuf::from(home).join(".config").join("iss_tracker"));
    }
    dirs
}

fn get_config (args: &Args)->Result<TrackerConfig> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::load( path)?,
        None => match find_and_load_config::<TrackerConfig>( &config_dirs(), CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::NotFoundError(_)) => TrackerConfig::default(),
            Err(e) => return Err( e.into())
        }
    };

    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    config.validate()?;

    Ok(config)
}

fn report_location (args: &Args, config: &TrackerConfig, location: &DerivedLocation, track: &GroundTrack)->Result<()> {
    if args.json {
        println!("{}", serde_json::to_string( location)?);
    } else {
        let footprint = location_footprint( config, &location.position);
        let date = location.date().map( |d| d.to_rfc3339()).unwrap_or_else( || location.timestamp.to_string());
        let marker = if location.is_first { " (acquiring)" } else { "" };

        println!("{date}: lat {:.4}, lon {:.4}, {:.0} m/s, course {:.1}°{marker}, footprint {} part(s), track {} points",
            location.position.latitude, location.position.longitude, location.velocity, location.course,
            footprint.0.len(), track.n_points());
    }
    Ok(())
}
