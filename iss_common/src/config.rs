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

//! loading of RON config files.
//! Config structs are expected to use `#[serde(default)]` so that files only need to contain
//! the values that differ from the built-in defaults

use std::{fs,path::{Path,PathBuf}};
use serde::{Serialize,de::DeserializeOwned};
use ron::ser::PrettyConfig;
use crate::define_error;

define_error!{ pub ConfigError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "RON error: {0}",
    SerializeError(#[from] ron::Error) : "RON serialization error: {0}",
    NotFoundError(String) : "config not found: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn load_config_path<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( ConfigError::NotFoundError( path.display().to_string()))
    }
    let data = fs::read( path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// parse a config from an in-memory RON string
pub fn load_config_str<C> (s: &str) -> Result<C> where C: DeserializeOwned {
    Ok( ron::de::from_str(s)? )
}

/// look up a config file in `dirs` (in order) and load the first one that exists
pub fn find_and_load_config<C> (dirs: &[PathBuf], filename: &str) -> Result<C> where C: DeserializeOwned {
    for dir in dirs {
        let path = dir.join( filename);
        if path.is_file() {
            return load_config_path( &path)
        }
    }
    Err( ConfigError::NotFoundError( filename.to_string()))
}

pub fn config_to_ron_string<C> (config: &C) -> Result<String> where C: Serialize {
    Ok( ron::ser::to_string_pretty( config, PrettyConfig::default())? )
}
