//! Tests for HTTP controller endpoints.
//!
//! These tests call the handlers directly with extracted arguments, verifying status codes,
//! response bodies and error handling for every API endpoint.

mod favorite;

use multiverse_test_utils::prelude::*;

use crate::{util::into_json, TestContextExt};
