//! Default value merging.
//!
//! Shared by the load pipeline and [`Config::set_defaults`](crate::Config::set_defaults):
//! a default is written only where neither the literal key nor its nested
//! reading already resolves, so parsed values always win.

use crate::path;
use crate::value::Map;

pub(crate) fn apply_defaults(data: &mut Map, defaults: &Map, separator: char) {
    for (key, value) in defaults {
        if !path::contains(data, key, separator) {
            path::insert(data, key, value.clone(), separator);
        }
    }
}
