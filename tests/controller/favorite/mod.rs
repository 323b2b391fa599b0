//! Tests for favorite controller endpoints.


use super::*;
