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

/// syntactic sugar macro to define thiserror Error enums:
/// ```ignore
/// define_error!{ pub ConfigError = 
///   IOError( #[from] std::io::Error ) : "IO error: {0}",
///   OpFailed(String) : "operation failed: {0}"
/// }
/// ```
/// will get expanded into
/// ```ignore
/// #[derive(thiserror::Error,Debug)]
/// pub enum ConfigError {
///     #[error("IO error: {0}")]
///     IOError(#[from] std::io::Error),
/// 
///     #[error("operation failed: {0}")]
///     OpFailed(String),
/// }
/// ```
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $err_variant:ident ( $( $( #[$meta:meta] )? $field_type:ty),* ) : $msg_lit:literal ),*) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $( 
                #[error($msg_lit)]
                $err_variant ( $( $(#[$meta])? $field_type ),*  )
            ),*
        }
    }
}

/// shortcut for `if let` chains that should only execute the block if all patterns match
/// ```ignore
/// if_let! {
///     Some(a) = opt_a,
///     Ok(b) = res_b => { println!("{a} {b}") }
/// }
/// ```
#[macro_export]
macro_rules! if_let {
    ( $p:pat = $e:expr => $b:block ) => {
        if let $p = $e $b
    };
    ( $p:pat = $e:expr , $( $pp:pat = $ee:expr ),+ => $b:block ) => {
        if let $p = $e { $crate::if_let! { $( $pp = $ee ),+ => $b } }
    };
}
