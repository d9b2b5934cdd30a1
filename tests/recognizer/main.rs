//! Integration tests for Layer 2: sentence recognizers and syntax rules.

mod db_properties;
mod ui_properties;
